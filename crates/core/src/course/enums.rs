//! Enumerations used by the course aggregate.
//!
//! Every enum has a canonical upper-case literal (e.g. `BEGINNER`) used both
//! in JSON and in stored records. Parsing is case-insensitive.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseEnumError;

macro_rules! string_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$variant_meta:meta])* $variant:ident => $literal:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $literal)]
                $variant,
            )+
        }

        impl $name {
            /// All variants, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the canonical literal for this variant.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $literal),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ParseEnumError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_uppercase().as_str() {
                    $($literal => Ok($name::$variant),)+
                    _ => Err(ParseEnumError {
                        type_name: stringify!($name),
                        value: s.to_string(),
                        expected: $name::ALL.iter().map(|v| v.as_str()).collect::<Vec<_>>().join(", "),
                    }),
                }
            }
        }
    };
}

string_enum! {
    /// Difficulty level of a course.
    Level {
        Beginner => "BEGINNER",
        Intermediate => "INTERMEDIATE",
        Advanced => "ADVANCED",
    }
}

string_enum! {
    /// Lifecycle status of a course.
    CourseStatus {
        Draft => "DRAFT",
        Published => "PUBLISHED",
        Archived => "ARCHIVED",
    }
}

string_enum! {
    /// Language a course is taught in.
    Language {
        English => "ENGLISH",
        Hindi => "HINDI",
        Spanish => "SPANISH",
        French => "FRENCH",
        German => "GERMAN",
    }
}

string_enum! {
    PricingModel {
        Free => "FREE",
        Paid => "PAID",
    }
}

string_enum! {
    LearningMode {
        Online => "ONLINE",
        Offline => "OFFLINE",
        Hybrid => "HYBRID",
    }
}

string_enum! {
    Currency {
        Usd => "USD",
        Inr => "INR",
        Eur => "EUR",
    }
}

string_enum! {
    PublisherType {
        Individual => "INDIVIDUAL",
        Company => "COMPANY",
    }
}

string_enum! {
    /// Whether lessons must be taken in order.
    LessonNavigationMode {
        Sequential => "SEQUENTIAL",
        Flexible => "FLEXIBLE",
    }
}

string_enum! {
    /// Kind of lesson content.
    ContentType {
        Video => "VIDEO",
        Pdf => "PDF",
        Quiz => "QUIZ",
    }
}

string_enum! {
    /// Whether a quiz question accepts one or several answers.
    AnswerChoice {
        Single => "SINGLE",
        Multiple => "MULTIPLE",
    }
}
