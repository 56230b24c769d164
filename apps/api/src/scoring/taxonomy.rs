//! Fixed decision tables shared by the scorers. Order matters wherever a table is
//! scanned for a first hit.

// ── ATS format ──────────────────────────────────────────────────────────────

pub const SECTION_KEYWORDS: &[&str] = &[
    "summary",
    "experience",
    "education",
    "skills",
    "work",
    "project",
    "qualification",
];

pub const BULLET_CHARS: &[char] = &['•', '-', '*', '·', '▪', '▸', '▬', '→'];

pub const PROFESSIONAL_VERBS: &[&str] = &[
    "developed",
    "managed",
    "implemented",
    "created",
    "led",
    "coordinated",
    "designed",
    "built",
    "worked",
];

// ── ATS skills ──────────────────────────────────────────────────────────────

pub const TECHNICAL_SKILL_KEYWORDS: &[&str] = &[
    "python", "java", "javascript", "react", "node", "sql", "aws", "docker", "kubernetes",
    "git", "linux", "html", "css", "angular", "vue", "mongodb", "postgresql", "mysql",
    "redis", "api", "devops",
];

pub const SOFT_SKILL_KEYWORDS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "problem solving",
    "project management",
    "analytical",
    "creative",
    "detail oriented",
];

pub const HIGH_DEMAND_SKILLS: &[&str] = &[
    "python",
    "java",
    "javascript",
    "aws",
    "docker",
    "kubernetes",
    "react",
    "node.js",
];

/// Five-way taxonomy used for ATS skill diversity. Skills outside it count as "other".
pub const ATS_SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    ("programming", &["python", "java", "javascript", "c++", "c#", "go", "rust"]),
    ("web", &["html", "css", "react", "angular", "vue", "node", "express"]),
    ("database", &["sql", "mysql", "postgresql", "mongodb", "redis"]),
    ("cloud", &["aws", "azure", "gcp", "docker", "kubernetes"]),
    ("tools", &["git", "jenkins", "terraform", "ansible"]),
];

// ── ATS education ───────────────────────────────────────────────────────────

pub const EDUCATION_LEVELS: &[(&str, f64)] = &[
    ("phd", 1.0),
    ("doctorate", 1.0),
    ("master", 0.8),
    ("mba", 0.8),
    ("bachelor", 0.6),
    ("degree", 0.5),
    ("associate", 0.3),
    ("certificate", 0.2),
];

// ── Skills match ────────────────────────────────────────────────────────────

/// Single-step synonym lookup applied after lowercasing and trimming.
pub const SKILL_SYNONYMS: &[(&str, &str)] = &[
    ("js", "javascript"),
    ("typescript", "javascript"),
    ("ts", "typescript"),
    ("py", "python"),
    ("python3", "python"),
    ("c++", "cpp"),
    ("c#", "csharp"),
    (".net", "csharp"),
    ("html5", "html"),
    ("css3", "css"),
    ("sass", "css"),
    ("scss", "css"),
    ("reactjs", "react"),
    ("react.js", "react"),
    ("nextjs", "react"),
    ("vuejs", "vue"),
    ("vue.js", "vue"),
    ("angularjs", "angular"),
    ("nodejs", "node"),
    ("node.js", "node"),
    ("expressjs", "express"),
    ("postgres", "postgresql"),
    ("postgre", "postgresql"),
    ("mongo", "mongodb"),
    ("nosql", "mongodb"),
    ("aws", "amazon web services"),
    ("azure", "microsoft azure"),
    ("gcp", "google cloud"),
    ("k8s", "kubernetes"),
    ("ci/cd", "cicd"),
    ("github", "git"),
    ("gitlab", "git"),
    ("ubuntu", "linux"),
    ("unix", "linux"),
    ("rest", "api"),
    ("graphql", "api"),
    ("soap", "api"),
];

pub const CRITICAL_SKILLS: &[&str] = &[
    "python", "java", "javascript", "react", "node", "sql", "aws", "docker", "kubernetes",
    "git", "linux", "api", "devops",
];

/// Eight-way taxonomy used for the skills-match diversity bonus.
pub const MATCH_SKILL_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "programming",
        &["python", "java", "javascript", "c++", "c#", "go", "rust", "cpp", "csharp", "typescript"],
    ),
    (
        "web",
        &["html", "css", "react", "angular", "vue", "node", "express", "sass", "scss"],
    ),
    (
        "database",
        &["sql", "mysql", "postgresql", "mongodb", "redis", "nosql", "postgres"],
    ),
    (
        "cloud",
        &[
            "aws",
            "azure",
            "gcp",
            "docker",
            "kubernetes",
            "amazon web services",
            "google cloud",
            "microsoft azure",
        ],
    ),
    ("tools", &["git", "jenkins", "terraform", "ansible", "github", "gitlab"]),
    ("devops", &["devops", "cicd", "ci/cd", "k8s"]),
    (
        "mobile",
        &["ios", "android", "swift", "kotlin", "react native", "flutter"],
    ),
    (
        "data",
        &[
            "machine learning",
            "data science",
            "analytics",
            "tensorflow",
            "pytorch",
            "pandas",
            "numpy",
        ],
    ),
];

// ── Semantic similarity ─────────────────────────────────────────────────────

pub const IMPORTANT_KEYWORDS: &[&str] = &[
    "python", "java", "javascript", "react", "node", "sql", "aws", "docker", "kubernetes",
    "git", "linux", "api", "devops", "microservices", "cloud", "machine learning", "ai",
    "data science", "analytics", "big data", "frontend", "backend", "fullstack", "mobile",
    "web", "software", "senior", "lead", "manager", "architect", "principal", "director",
    "agile", "scrum", "cicd", "testing", "security", "performance",
];

pub const CRITICAL_TITLE_KEYWORDS: &[&str] =
    &["senior", "lead", "manager", "architect", "principal", "director"];

pub const RESUME_TITLE_PATTERNS: &[&str] = &[
    r"(?i)(?:senior|lead|principal|staff|junior|associate)\s+(?:software|web|mobile|data|cloud)\s+(?:engineer|developer|architect)",
    r"(?i)(?:software|web|mobile|data|cloud)\s+(?:engineer|developer|architect)",
    r"(?i)(?:senior|lead|principal)\s+(?:engineer|developer|architect)",
    r"(?i)(?:manager|director|head)\s+(?:of\s+)?(?:engineering|technology|development)",
    r"(?i)(?:cto|vp\s+of\s+engineering|chief\s+technology\s+officer)",
];

pub const JOB_TITLE_ROLE_WORDS: &[&str] =
    &["engineer", "developer", "architect", "manager", "director"];

pub const SIMILARITY_DOMAINS: &[(&str, &[&str])] = &[
    ("software", &["software", "application", "system", "platform"]),
    ("web", &["web", "website", "frontend", "backend", "fullstack"]),
    ("mobile", &["mobile", "ios", "android", "app"]),
    ("data", &["data", "analytics", "database", "big data"]),
    ("cloud", &["cloud", "aws", "azure", "gcp", "saas"]),
    ("devops", &["devops", "deployment", "infrastructure", "ci/cd"]),
    ("security", &["security", "cybersecurity", "authentication"]),
    (
        "ai_ml",
        &["machine learning", "ai", "artificial intelligence", "ml", "deep learning"],
    ),
];

// ── Experience match ────────────────────────────────────────────────────────

pub const JOB_SENIORITY_LEVELS: &[&str] = &[
    "intern",
    "entry",
    "junior",
    "associate",
    "mid",
    "intermediate",
    "senior",
    "lead",
    "principal",
    "staff",
    "manager",
    "director",
    "head",
    "vp",
    "chief",
    "cto",
    "ceo",
];

pub const RESUME_SENIORITY_LEVELS: &[&str] = &[
    "intern",
    "junior",
    "associate",
    "mid",
    "senior",
    "lead",
    "principal",
    "staff",
    "manager",
    "director",
    "head",
    "architect",
];

pub const SENIORITY_RANKS: &[(&str, u32)] = &[
    ("intern", 0),
    ("entry", 1),
    ("junior", 2),
    ("associate", 3),
    ("mid", 4),
    ("intermediate", 4),
    ("senior", 5),
    ("lead", 6),
    ("principal", 7),
    ("staff", 7),
    ("manager", 8),
    ("director", 9),
    ("head", 9),
    ("architect", 6),
    ("vp", 10),
    ("chief", 11),
    ("cto", 11),
    ("ceo", 12),
];

/// Rank assumed for a level missing from the hierarchy ("mid").
pub const DEFAULT_SENIORITY_RANK: u32 = 4;

pub const EXPERIENCE_DOMAINS: &[&str] = &[
    "software", "web", "mobile", "data", "cloud", "devops", "security", "ai", "ml",
];

pub const JOB_LEADERSHIP_INDICATORS: &[&str] = &[
    "manage",
    "lead",
    "mentor",
    "supervise",
    "team lead",
    "project lead",
    "architect",
];

pub const RESUME_LEADERSHIP_KEYWORDS: &[&str] = &[
    "managed",
    "led",
    "mentored",
    "supervised",
    "team lead",
    "project lead",
    "architect",
    "senior",
];

pub fn seniority_rank(level: &str) -> u32 {
    SENIORITY_RANKS
        .iter()
        .find(|(name, _)| *name == level)
        .map(|(_, rank)| *rank)
        .unwrap_or(DEFAULT_SENIORITY_RANK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seniority_rank_known_levels() {
        assert_eq!(seniority_rank("intern"), 0);
        assert_eq!(seniority_rank("architect"), 6);
        assert_eq!(seniority_rank("ceo"), 12);
    }

    #[test]
    fn test_seniority_rank_defaults_to_mid() {
        assert_eq!(seniority_rank("wizard"), DEFAULT_SENIORITY_RANK);
    }

    #[test]
    fn test_education_levels_are_within_unit_range() {
        assert!(EDUCATION_LEVELS.iter().all(|(_, s)| (0.0..=1.0).contains(s)));
    }
}
