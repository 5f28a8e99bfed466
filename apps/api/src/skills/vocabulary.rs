//! Skill vocabulary — canonical skill names and the synonym phrases that map to them.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

/// A canonical skill and its alternate phrasings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillEntry {
    pub name: String,
    pub synonyms: Vec<String>,
}

/// Ordered, immutable table of skills. Canonical names are unique.
#[derive(Debug, Clone, Default)]
pub struct SkillVocabulary {
    entries: Vec<SkillEntry>,
}

impl SkillVocabulary {
    /// Builds a vocabulary from `(name, synonyms)` pairs.
    /// A repeated canonical name keeps its first position but takes the later synonym list.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<S>)>,
        S: Into<String>,
    {
        let mut out: Vec<SkillEntry> = Vec::new();
        for (name, synonyms) in entries {
            let name: String = name.into();
            if name.trim().is_empty() {
                bail!("skill vocabulary contains a blank canonical name");
            }
            let synonyms: Vec<String> = synonyms.into_iter().map(Into::into).collect();
            if let Some(blank) = synonyms.iter().position(|s| s.trim().is_empty()) {
                bail!("skill '{name}' has a blank synonym at index {blank}");
            }
            match out.iter_mut().find(|e| e.name == name) {
                Some(existing) => existing.synonyms = synonyms,
                None => out.push(SkillEntry { name, synonyms }),
            }
        }
        Ok(Self { entries: out })
    }

    /// The curated table shipped with the service.
    pub fn builtin() -> Self {
        let entries = BUILTIN_SKILLS
            .iter()
            .map(|(name, synonyms)| SkillEntry {
                name: (*name).to_string(),
                synonyms: synonyms.iter().map(|s| (*s).to_string()).collect(),
            })
            .collect();
        Self { entries }
    }

    /// Parses a JSON object of `{ "Canonical": ["synonym", ...] }`.
    /// Entries are ordered by canonical name.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: BTreeMap<String, Vec<String>> =
            serde_json::from_str(json).context("skill vocabulary must be a JSON object of string arrays")?;
        Self::new(raw)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read skill vocabulary '{}'", path.display()))?;
        Self::from_json_str(&json)
            .with_context(|| format!("Invalid skill vocabulary '{}'", path.display()))
    }

    pub fn entries(&self) -> &[SkillEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e.name == name)
    }

    #[cfg(test)]
    fn duplicate_names(&self) -> Vec<&str> {
        let mut seen = std::collections::HashSet::new();
        self.entries
            .iter()
            .filter(|e| !seen.insert(e.name.as_str()))
            .map(|e| e.name.as_str())
            .collect()
    }
}

const BUILTIN_SKILLS: &[(&str, &[&str])] = &[
    // General programming & software engineering
    ("Python", &["python scripting", "python programming"]),
    ("Java", &["java development", "java programming"]),
    ("C++", &["c plus plus", "cpp"]),
    ("C", &["c programming"]),
    ("JavaScript", &["js", "javascript development"]),
    ("TypeScript", &["ts", "typescript development"]),
    ("Go", &["golang"]),
    ("Rust", &[]),
    ("Swift", &["ios development"]),
    ("Kotlin", &["android development"]),
    ("HTML", &["hypertext markup language"]),
    ("CSS", &["cascading style sheets"]),
    ("SQL", &["structured query language"]),
    ("NoSQL", &["non-relational databases"]),
    ("Git", &["version control system", "vcs"]),
    ("Version Control", &[]),
    ("Agile", &["agile methodologies"]),
    ("Scrum", &["scrum framework"]),
    ("Software Development", &["software development life cycle", "sdlc"]),
    ("Software Engineering", &[]),
    ("Object-Oriented Programming", &["oop"]),
    ("Data Structures", &[]),
    ("Algorithms", &[]),
    ("Software Testing", &["qa testing", "quality assurance"]),
    ("Debugging", &["code debugging"]),
    ("Software Architecture", &["system architecture"]),
    ("API Development", &["application programming interface development"]),
    ("Microservices", &[]),
    ("Full-Stack Development", &[]),
    ("Front-End Development", &["client-side development"]),
    ("Back-End Development", &["server-side development"]),
    ("Mobile App Development", &["mobile development"]),
    ("Web Development", &[]),
    ("Database Management", &["db management"]),
    ("Database Systems", &[]),
    ("Operating Systems", &["os"]),
    ("Software Design", &[]),
    ("Software Maintenance", &[]),
    ("Code Review", &[]),
    ("Scripting", &[]),
    ("Linux", &["unix-like operating systems"]),
    ("Unix", &[]),
    ("Bash", &["shell scripting"]),
    ("Continuous Integration", &["ci"]),
    ("Continuous Deployment", &["cd"]),
    ("CI/CD", &["continuous integration/continuous deployment"]),
    ("DevOps", &["development operations"]),
    ("Containerization", &[]),
    ("Docker", &[]),
    ("Kubernetes", &["k8s"]),
    ("Cloud Computing", &[]),
    ("Cloud Infrastructure", &[]),
    ("Cloud Services", &[]),
    ("Cloud Architecture", &[]),
    ("Cloud Migration", &[]),
    ("Cloud Security", &[]),
    ("Cloud Cost Optimization", &[]),
    ("Cloud Native Computing", &[]),
    ("Cloud Data Engineering", &[]),
    ("Cloud Data Analytics", &[]),
    ("Cloud Data Science", &[]),
    ("Cloud Data Integration", &[]),
    ("Cloud Data Management", &[]),
    ("Cloud Data Security", &[]),
    ("Cloud Data Governance", &[]),
    ("Cloud Data Quality", &[]),
    ("Cloud Data Visualization", &[]),
    ("Database Administration", &["dba"]),
    ("Game Development", &[]),
    // Data science, AI & machine learning
    ("Data Science", &[]),
    ("Machine Learning", &["ml"]),
    ("Deep Learning", &["dl"]),
    ("Artificial Intelligence", &["ai"]),
    ("Natural Language Processing", &["nlp"]),
    ("Computer Vision", &["cv"]),
    ("Data Analysis", &[]),
    ("Data Mining", &[]),
    ("Data Visualization", &[]),
    ("Statistics", &[]),
    ("Mathematics", &["math"]),
    ("Big Data", &[]),
    ("Data Wrangling", &[]),
    ("Feature Engineering", &[]),
    ("Model Evaluation", &[]),
    ("Predictive Modeling", &[]),
    ("Neural Networks", &[]),
    ("Reinforcement Learning", &[]),
    ("Time Series Analysis", &[]),
    ("Data Modeling", &[]),
    // Electrical, electronics & computer engineering
    ("Circuit Design", &[]),
    ("Embedded Systems", &[]),
    ("Digital Signal Processing", &["dsp"]),
    ("Analog Circuit Design", &[]),
    ("Power Electronics", &[]),
    ("Control Systems", &[]),
    ("VLSI Design", &["very large scale integration"]),
    ("Microcontrollers", &["mcu"]),
    ("Microprocessors", &["cpu"]),
    ("FPGA", &["field-programmable gate array"]),
    ("PCB Design", &["printed circuit board design"]),
    ("Signal Processing", &[]),
    ("Robotics", &[]),
    ("Internet of Things", &["iot"]),
    ("IoT", &[]),
    ("Communication Systems", &[]),
    ("Telecommunications", &[]),
    ("Wireless Communication", &[]),
    ("Networking", &["network administration"]),
    ("Computer Architecture", &[]),
    ("Digital Logic", &[]),
    ("Analog Electronics", &[]),
    ("Instrumentation", &[]),
    ("Power Systems", &[]),
    ("Renewable Energy", &[]),
    ("Electrical Machines", &[]),
    ("Electromagnetics", &[]),
    ("Semiconductor Devices", &[]),
    ("Embedded Software", &[]),
    ("Real-Time Systems", &[]),
    // Cybersecurity & networking
    ("Cybersecurity", &["information security"]),
    ("Cryptography", &[]),
    ("Information Security", &[]),
    ("Network Security", &[]),
    ("Penetration Testing", &["pentesting"]),
    ("Vulnerability Assessment", &[]),
    ("Security Auditing", &[]),
    ("Firewalls", &[]),
    ("Intrusion Detection", &[]),
    ("Network Protocols", &[]),
    ("TCP/IP", &[]),
    ("DNS", &["domain name system"]),
    ("Routing", &[]),
    ("Switching", &[]),
    ("Network Administration", &[]),
    ("Information Systems", &["is"]),
    // Emerging technologies
    ("Blockchain", &[]),
    ("Virtual Reality", &["vr"]),
    ("Augmented Reality", &["ar"]),
    ("Mixed Reality", &["mr"]),
    ("Quantum Computing", &[]),
    ("Edge Computing", &[]),
    ("Distributed Systems", &[]),
    ("Human-Computer Interaction", &["hci"]),
    ("Computer Graphics", &[]),
    ("Computational Complexity", &[]),
    ("Computational Biology", &[]),
    // Tools & frameworks
    ("TensorFlow", &["tf"]),
    ("PyTorch", &[]),
    ("Scikit-learn", &["sklearn"]),
    ("Pandas", &[]),
    ("NumPy", &[]),
    ("Spark", &["apache spark"]),
    ("Hadoop", &["apache hadoop"]),
    ("AWS", &["amazon web services"]),
    ("Azure", &["microsoft azure"]),
    ("GCP", &["google cloud platform"]),
    ("React", &["reactjs"]),
    ("Angular", &["angularjs"]),
    ("Vue.js", &["vue"]),
    ("Node.js", &["nodejs"]),
    ("Django", &[]),
    ("Flask", &[]),
    ("Spring Boot", &[]),
    (".NET", &[]),
    ("MATLAB", &[]),
    ("Simulink", &[]),
    ("LabVIEW", &[]),
    ("Cadence", &[]),
    ("Altium", &[]),
    ("Proteus", &[]),
    ("PSpice", &[]),
    ("Arduino", &[]),
    ("Raspberry Pi", &[]),
    // Soft skills
    ("Problem Solving", &[]),
    ("Communication", &[]),
    ("Teamwork", &[]),
    ("Collaboration", &[]),
    ("Project Management", &[]),
    ("Critical Thinking", &[]),
    ("Analytical Skills", &[]),
    ("Leadership", &[]),
    ("Time Management", &[]),
    ("Presentation Skills", &[]),
    ("Documentation", &[]),
    ("Adaptability", &[]),
    ("Learning Agility", &[]),
];
