use crate::sections;
use crate::utils::error::Result;
use std::io::Write;
use std::str::FromStr;
use thiserror::Error;

/// A demonstration routine. Demos write their narration to the supplied
/// stream and report failure through the return value; the dispatcher decides
/// what a failure means for the session.
pub type Handler = fn(&mut dyn Write) -> Result<()>;

pub struct Demo {
    pub name: &'static str,
    pub run: Handler,
}

/// The ten topics of the guide, keyed 1 through 10 on the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Basics = 1,
    Operations = 2,
    Methods = 3,
    Builders = 4,
    Iteration = 5,
    Comparison = 6,
    Advanced = 7,
    FrozenSets = 8,
    Applications = 9,
    Performance = 10,
}

impl Section {
    pub const ALL: [Section; 10] = [
        Section::Basics,
        Section::Operations,
        Section::Methods,
        Section::Builders,
        Section::Iteration,
        Section::Comparison,
        Section::Advanced,
        Section::FrozenSets,
        Section::Applications,
        Section::Performance,
    ];

    pub fn key(self) -> u8 {
        self as u8
    }

    pub fn from_key(key: u8) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.key() == key)
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Basics => "Set Basics and Creation",
            Section::Operations => "Set Operations (Union, Intersection, etc.)",
            Section::Methods => "Set Methods (insert, remove, etc.)",
            Section::Builders => "Building Sets from Iterators",
            Section::Iteration => "Set Iteration Techniques",
            Section::Comparison => "HashSet vs Vec vs Boxed Slice",
            Section::Advanced => "Advanced Set Techniques",
            Section::FrozenSets => "Frozen Sets (BTreeSet as a value)",
            Section::Applications => "Practical Applications",
            Section::Performance => "Performance Analysis",
        }
    }

    /// The fixed demo table for this topic. Built once into the binary;
    /// never reconfigured at runtime.
    pub fn demos(self) -> &'static [Demo] {
        match self {
            Section::Basics => &[
                Demo {
                    name: "set_creation_examples",
                    run: sections::basics::creation_examples,
                },
                Demo {
                    name: "set_properties_examples",
                    run: sections::basics::properties_examples,
                },
            ],
            Section::Operations => &[
                Demo {
                    name: "set_operations_examples",
                    run: sections::operations::operations_examples,
                },
                Demo {
                    name: "set_comparison_examples",
                    run: sections::operations::comparison_examples,
                },
            ],
            Section::Methods => &[
                Demo {
                    name: "set_methods_examples",
                    run: sections::methods::methods_examples,
                },
                Demo {
                    name: "set_copy_examples",
                    run: sections::methods::copy_examples,
                },
            ],
            Section::Builders => &[Demo {
                name: "set_builders_examples",
                run: sections::builders::builders_examples,
            }],
            Section::Iteration => &[Demo {
                name: "set_iteration_examples",
                run: sections::iteration::iteration_examples,
            }],
            Section::Comparison => &[Demo {
                name: "collection_comparison_examples",
                run: sections::comparison::comparison_examples,
            }],
            Section::Advanced => &[Demo {
                name: "advanced_set_techniques",
                run: sections::advanced::advanced_techniques,
            }],
            Section::FrozenSets => &[Demo {
                name: "frozen_set_examples",
                run: sections::frozen::frozen_set_examples,
            }],
            Section::Applications => &[Demo {
                name: "practical_applications",
                run: sections::applications::practical_applications,
            }],
            Section::Performance => &[Demo {
                name: "performance_analysis",
                run: sections::performance::performance_analysis,
            }],
        }
    }
}

/// What the user typed at the menu, once it parses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Exit,
    Section(Section),
}

/// Anything that is not an integer in 0..=10. Carries the offending input so
/// the rejection can be logged; the user-facing message stays generic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid choice: {0:?}")]
pub struct InvalidChoice(pub String);

impl FromStr for MenuChoice {
    type Err = InvalidChoice;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed.parse::<u8>() {
            Ok(0) => Ok(MenuChoice::Exit),
            Ok(key) => Section::from_key(key)
                .map(MenuChoice::Section)
                .ok_or_else(|| InvalidChoice(trimmed.to_string())),
            Err(_) => Err(InvalidChoice(trimmed.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_are_contiguous_from_one() {
        for (i, section) in Section::ALL.iter().enumerate() {
            assert_eq!(section.key() as usize, i + 1);
        }
    }

    #[test]
    fn every_section_resolves_from_its_key() {
        for section in Section::ALL {
            assert_eq!(Section::from_key(section.key()), Some(section));
        }
        assert_eq!(Section::from_key(0), None);
        assert_eq!(Section::from_key(11), None);
    }

    #[test]
    fn every_section_has_at_least_one_demo() {
        for section in Section::ALL {
            assert!(!section.demos().is_empty());
        }
    }

    #[test]
    fn parse_accepts_exit_and_sections() {
        assert_eq!("0".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert_eq!(
            "1".parse::<MenuChoice>(),
            Ok(MenuChoice::Section(Section::Basics))
        );
        assert_eq!(
            " 10 ".parse::<MenuChoice>(),
            Ok(MenuChoice::Section(Section::Performance))
        );
    }

    #[test]
    fn parse_rejects_out_of_range_and_garbage() {
        for input in ["11", "-1", "abc", "", "1.5"] {
            assert_eq!(
                input.parse::<MenuChoice>(),
                Err(InvalidChoice(input.trim().to_string()))
            );
        }
    }
}
