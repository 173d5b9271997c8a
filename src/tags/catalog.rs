//! Fixed candidate lists for the profile form pickers

pub const SKILLS: &[&str] = &[
    "Python",
    "JavaScript",
    "Java",
    "Data Analysis",
    "Machine Learning",
    "Digital Marketing",
    "Content Writing",
    "Project Management",
    "Research",
    "Communication",
    "Leadership",
    "Problem Solving",
    "Excel",
    "SQL",
    "Web Development",
    "Mobile Development",
    "Cybersecurity",
    "Network Security",
    "Cloud Computing",
    "Artificial Intelligence",
    "Data Science",
    "Statistics",
    "Financial Analysis",
    "Economics",
    "Healthcare",
    "Education",
    "Environmental Science",
    "Policy Research",
    "Documentation",
    "GIS",
    "Social Media",
    "Analytics",
    "Community Engagement",
    "Medical Research",
    "Learning Design",
    "Ethical Hacking",
];

pub const INTERESTS: &[&str] = &[
    "Technology",
    "Healthcare",
    "Education",
    "Finance & Banking",
    "Rural Development",
    "Environment",
    "Research & Analytics",
    "Cybersecurity",
    "Digital Marketing",
    "Data Science",
    "Policy Development",
    "Community Service",
    "Innovation",
    "Entrepreneurship",
    "Social Impact",
    "Government Services",
    "Public Administration",
    "Economic Development",
];

/// Which picker a container hosts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagField {
    Skills,
    Interests,
}

impl TagField {
    /// Form field name the hidden inputs submit under
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Skills => "skills",
            Self::Interests => "interests",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Skills => "Select your skills",
            Self::Interests => "Select your interests",
        }
    }

    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Self::Skills => SKILLS,
            Self::Interests => INTERESTS,
        }
    }
}
