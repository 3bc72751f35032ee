//! Portfolio content: the static data the site pages render.
//!
//! Content is authored as TOML (`content/portfolio.toml`). Every metric value
//! is shown through an animated counter, so [`Portfolio::validate`] parses
//! each one up front: a metric that cannot be animated is a content bug and
//! must be caught before release.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::counter::{CounterSpec, CounterTarget};
use crate::error::{FolioError, ParseError, ValidationError};

/// A headline number with a caption, e.g. `"960+"` / `"Hours automated"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub value: String,
    pub label: String,
}

impl Metric {
    /// Counter configuration for this metric's value.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the value has no finite number.
    pub fn spec(&self) -> Result<CounterSpec, ParseError> {
        CounterSpec::builder()
            .target(CounterTarget::Decorated(self.value.clone()))
            .build()
    }
}

/// Owner of the site: hero banner and contact details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub summary: String,
    /// Hero counter: hours of work automated each month.
    pub hours_automated: i64,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub companies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub key_learnings: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub courses: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volunteering {
    pub role: String,
    pub organization: String,
    pub period: String,
    pub description: String,
    /// One-line outcome shown when the entry has no metrics.
    #[serde(default)]
    pub impact: Option<String>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// Anything else worth a card on the path page: hobbies, side interests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiscEntry {
    pub title: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub details: Vec<String>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    #[serde(default)]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

/// One stage of the skills timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillPhase {
    pub title: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub applications: Vec<String>,
}

/// Sections that carry metrics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Experience,
    Education,
    Volunteering,
    Misc,
    Projects,
}

impl Section {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Experience => "experience",
            Self::Education => "education",
            Self::Volunteering => "volunteering",
            Self::Misc => "misc",
            Self::Projects => "projects",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A metric together with where it appears.
#[derive(Debug, Clone, Copy)]
pub struct MetricRef<'a> {
    pub section: Section,
    /// Title of the owning entry.
    pub entry: &'a str,
    pub metric: &'a Metric,
}

/// All site content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    #[serde(default)]
    pub experiences: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub volunteering: Vec<Volunteering>,
    #[serde(default)]
    pub misc: Vec<MiscEntry>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<SkillPhase>,
}

impl Portfolio {
    /// Decode TOML content and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Decode`] for malformed TOML and
    /// [`FolioError::Validation`] when an invariant fails.
    pub fn from_toml_str(content: &str) -> Result<Self, FolioError> {
        let portfolio = Self::decode(content)?;
        portfolio.validate()?;
        Ok(portfolio)
    }

    /// Decode TOML content without checking invariants.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Decode`] for malformed TOML.
    pub fn decode(content: &str) -> Result<Self, FolioError> {
        Ok(toml::from_str(content)?)
    }

    /// Every metric on the site, in page order.
    pub fn metrics(&self) -> impl Iterator<Item = MetricRef<'_>> {
        let experiences = self.experiences.iter().flat_map(|exp| {
            exp.metrics.iter().map(move |metric| MetricRef {
                section: Section::Experience,
                entry: &exp.title,
                metric,
            })
        });
        let education = self.education.iter().flat_map(|edu| {
            edu.metrics.iter().map(move |metric| MetricRef {
                section: Section::Education,
                entry: &edu.degree,
                metric,
            })
        });
        let volunteering = self.volunteering.iter().flat_map(|vol| {
            vol.metrics.iter().map(move |metric| MetricRef {
                section: Section::Volunteering,
                entry: &vol.role,
                metric,
            })
        });
        let misc = self.misc.iter().flat_map(|item| {
            item.metrics.iter().map(move |metric| MetricRef {
                section: Section::Misc,
                entry: &item.title,
                metric,
            })
        });
        let projects = self.projects.iter().flat_map(|project| {
            project.metrics.iter().map(move |metric| MetricRef {
                section: Section::Projects,
                entry: &project.title,
                metric,
            })
        });
        experiences
            .chain(education)
            .chain(volunteering)
            .chain(misc)
            .chain(projects)
    }

    /// Check content invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::Empty`] for a missing name, title or label,
    /// and [`ValidationError::Metric`] for a metric value that does not parse.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.profile.name.trim().is_empty() {
            return Err(ValidationError::Empty {
                what: "profile name",
            });
        }
        if self.experiences.iter().any(|e| e.title.trim().is_empty()) {
            return Err(ValidationError::Empty {
                what: "experience title",
            });
        }
        if self.volunteering.iter().any(|v| v.role.trim().is_empty()) {
            return Err(ValidationError::Empty {
                what: "volunteering role",
            });
        }
        if self.misc.iter().any(|m| m.title.trim().is_empty()) {
            return Err(ValidationError::Empty { what: "misc title" });
        }
        if self.projects.iter().any(|p| p.title.trim().is_empty()) {
            return Err(ValidationError::Empty {
                what: "project title",
            });
        }
        for item in self.metrics() {
            if item.metric.label.trim().is_empty() {
                return Err(ValidationError::Empty {
                    what: "metric label",
                });
            }
            item.metric
                .spec()
                .map_err(|source| ValidationError::Metric {
                    section: item.section.as_str(),
                    entry: item.entry.to_string(),
                    label: item.metric.label.clone(),
                    source,
                })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        [profile]
        name = "Edward"
        headline = "Data-Driven Product Guy"
        summary = "Product and operations."
        hours_automated = 960

        [[experiences]]
        title = "Senior Product Operations"
        company = "Web3 Gaming Studio"
        period = "2022 - Present"
        description = "Automation."
        metrics = [
            { value = "960+", label = "Hours automated monthly" },
            { value = "$1.7M+", label = "Assets managed" },
        ]

        [[projects]]
        title = "Dune Wizard"
        subtitle = "Analytics"
        description = "Dashboards."
        metrics = [{ value = "8.5x", label = "User base" }]
    "#;

    const SIDE_SECTIONS: &str = r#"
        [[volunteering]]
        role = "Mentor"
        organization = "Code Club"
        period = "2021 - Present"
        description = "Weekly sessions."
        metrics = [{ value = "40+", label = "Students mentored" }]

        [[misc]]
        title = "Photography"
        category = "Hobby"
        description = "Street photography."
        metrics = [{ value = "2,500+", label = "Photos taken" }]
    "#;

    #[test]
    fn should_parse_sample_content() {
        let portfolio = Portfolio::from_toml_str(SAMPLE).unwrap();
        assert_eq!(portfolio.profile.name, "Edward");
        assert_eq!(portfolio.experiences.len(), 1);
        assert!(portfolio.education.is_empty());
    }

    #[test]
    fn should_list_metrics_in_page_order() {
        let portfolio = Portfolio::from_toml_str(SAMPLE).unwrap();
        let labels: Vec<_> = portfolio
            .metrics()
            .map(|m| (m.section, m.metric.value.as_str()))
            .collect();
        assert_eq!(
            labels,
            vec![
                (Section::Experience, "960+"),
                (Section::Experience, "$1.7M+"),
                (Section::Projects, "8.5x"),
            ]
        );
    }

    #[test]
    fn should_default_side_sections_to_empty() {
        let portfolio = Portfolio::from_toml_str(SAMPLE).unwrap();
        assert!(portfolio.volunteering.is_empty());
        assert!(portfolio.misc.is_empty());
    }

    #[test]
    fn should_list_side_section_metrics_between_education_and_projects() {
        let content = format!("{SAMPLE}{SIDE_SECTIONS}");
        let portfolio = Portfolio::from_toml_str(&content).unwrap();
        let order: Vec<_> = portfolio
            .metrics()
            .map(|m| (m.section.as_str(), m.entry, m.metric.value.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("experience", "Senior Product Operations", "960+"),
                ("experience", "Senior Product Operations", "$1.7M+"),
                ("volunteering", "Mentor", "40+"),
                ("misc", "Photography", "2,500+"),
                ("projects", "Dune Wizard", "8.5x"),
            ]
        );
    }

    #[test]
    fn should_reject_side_section_metric_without_number() {
        let content = format!("{SAMPLE}{SIDE_SECTIONS}").replace("2,500+", "a lot");
        let err = Portfolio::from_toml_str(&content).unwrap_err();
        assert!(matches!(
            err,
            FolioError::Validation(ValidationError::Metric {
                section: "misc",
                ..
            })
        ));
    }

    #[test]
    fn should_reject_empty_volunteering_role() {
        let content = format!("{SAMPLE}{SIDE_SECTIONS}").replace("\"Mentor\"", "\"\"");
        assert!(matches!(
            Portfolio::from_toml_str(&content),
            Err(FolioError::Validation(ValidationError::Empty {
                what: "volunteering role"
            }))
        ));
    }

    #[test]
    fn should_reject_metric_without_number() {
        let broken = SAMPLE.replace("8.5x", "lots");
        let err = Portfolio::from_toml_str(&broken).unwrap_err();
        match err {
            FolioError::Validation(ValidationError::Metric {
                section,
                entry,
                source,
                ..
            }) => {
                assert_eq!(section, "projects");
                assert_eq!(entry, "Dune Wizard");
                assert!(matches!(source, ParseError::NoDigits { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn should_reject_empty_metric_label() {
        let broken = SAMPLE.replace("User base", " ");
        assert!(matches!(
            Portfolio::from_toml_str(&broken),
            Err(FolioError::Validation(ValidationError::Empty {
                what: "metric label"
            }))
        ));
    }

    #[test]
    fn should_reject_empty_profile_name() {
        let broken = SAMPLE.replace("\"Edward\"", "\"\"");
        assert!(matches!(
            Portfolio::from_toml_str(&broken),
            Err(FolioError::Validation(ValidationError::Empty { .. }))
        ));
    }

    #[test]
    fn should_report_decode_error_for_malformed_toml() {
        assert!(matches!(
            Portfolio::from_toml_str("profile = {{{"),
            Err(FolioError::Decode(_))
        ));
    }

    #[test]
    fn should_build_counter_spec_from_metric() {
        let metric = Metric {
            value: "80,000+".to_string(),
            label: "Community members".to_string(),
        };
        assert_eq!(metric.spec().unwrap().final_text(), "80,000+");
    }
}
