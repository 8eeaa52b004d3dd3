//! Portfolio content model
//!
//! Static display content, immutable for the process lifetime. The
//! built-in data ships with the binary; `config` can replace individual
//! tables from ~/.reef/portfolio.toml. Every struct defaults to its
//! built-in value so a partial override file stays valid.

use serde::{Deserialize, Serialize};

/// Hero header content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Header {
    pub name: String,
    pub title: String,
    /// Short chips rendered beside the name
    pub badges: Vec<String>,
    /// One-line facts under the name
    pub tags: Vec<String>,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            name: "Ali Alfridawi".to_string(),
            title: "Electrical Engineering Student".to_string(),
            badges: vec!["UTA Freshman".to_string(), "Research".to_string()],
            tags: vec![
                "Based in Texas".to_string(),
                "Passionate about Innovation".to_string(),
            ],
        }
    }
}

/// Bio strip content: the blurb plus the highlight cards under it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bio {
    pub blurb: String,
    pub highlights: Vec<Highlight>,
}

impl Default for Bio {
    fn default() -> Self {
        Self {
            blurb: "Young engineer passionate about photonics excited to participate \
                    in research and innovate in the field of electrical engineering."
                .to_string(),
            highlights: vec![
                Highlight::new("Hobbies", "Card Games and Working Out"),
                Highlight::new("Focus", "Photonics & Electronics"),
                Highlight::new("Interest", "Competitive Programming and Math"),
            ],
        }
    }
}

/// Label/detail pair rendered as a card in the bio strip
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub label: String,
    pub detail: String,
}

impl Highlight {
    pub fn new(label: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub year: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub role: String,
    pub company: String,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    pub name: String,
    pub summary: String,
}

/// Outbound contact links - opaque strings handed to the platform opener
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub github: String,
    pub linkedin: String,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            email: "ama3373@mavas.uta.edu".to_string(),
            github: "https://github.com/AliAlfridawi".to_string(),
            linkedin: "https://www.linkedin.com/in/alialfridawi/".to_string(),
        }
    }
}

/// The whole portfolio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub header: Header,
    pub bio: Bio,
    pub about: String,
    pub education: Vec<EducationEntry>,
    pub experience: Vec<ExperienceEntry>,
    pub skills: Vec<String>,
    /// May be empty; the Projects panel shows a placeholder then
    pub projects: Vec<ProjectEntry>,
    pub contact: Contact,
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            header: Header::default(),
            bio: Bio::default(),
            about: "I am a Freshman in Electrical Engineering at the University of Texas \
                    at Arlington, with strong interests in research, photonics, and signal \
                    processing. As I continue developing my programming skills, I'm \
                    committed to creating clear, well-structured documentation for both \
                    personal and academic projects using GitHub. I am eager to learn, \
                    collaborate, and connect with others in engineering and research \
                    communities, and I'm open to networking and new opportunities."
                .to_string(),
            education: vec![EducationEntry {
                degree: "Bachelor of Science in Electrical Engineering".to_string(),
                school: "University of Texas at Arlington".to_string(),
                year: "2029".to_string(),
            }],
            experience: vec![
                ExperienceEntry {
                    role: "Undergraduate Research Assistant".to_string(),
                    company: "University of Texas at Arlington".to_string(),
                    date: "2025 - Present".to_string(),
                    description: "Developed Python scripts with NumPy, SciPy, Pandas, and \
                                  S4 to model and analyze nanophotonics experiments, \
                                  enabling faster data processing and uncovering key \
                                  optical patterns that guided subsequent experimental \
                                  designs."
                        .to_string(),
                },
                ExperienceEntry {
                    role: "IT Intern".to_string(),
                    company: "iFortriss".to_string(),
                    date: "2024 - 2025".to_string(),
                    description: "Engineered and tested a secure office network \
                                  infrastructure with a patch panel, a firewall, a \
                                  ticketing system, wireless access points, and a server, \
                                  resulting in more reliable network performance and \
                                  faster issue resolution."
                        .to_string(),
                },
            ],
            skills: [
                "Python", "MATLAB", "C/C++", "Multisim", "Altium", "KiCad", "Git",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            projects: Vec::new(),
            contact: Contact::default(),
        }
    }
}

impl Portfolio {
    /// The content compiled into the binary
    pub fn built_in() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_built_in_is_populated() {
        let p = Portfolio::built_in();
        assert!(!p.header.name.is_empty());
        assert!(!p.about.is_empty());
        assert_eq!(p.education.len(), 1);
        assert_eq!(p.experience.len(), 2);
        assert_eq!(p.skills.len(), 7);
        assert_eq!(p.bio.highlights.len(), 3);
    }

    #[test]
    fn test_built_in_projects_empty_triggers_placeholder() {
        // The Projects panel relies on an empty list to show its placeholder
        assert!(Portfolio::built_in().projects.is_empty());
    }

    #[test]
    fn test_contact_links_are_web_uris() {
        let c = Contact::default();
        assert!(c.github.starts_with("https://"));
        assert!(c.linkedin.starts_with("https://"));
        assert!(c.email.contains('@'));
    }
}
