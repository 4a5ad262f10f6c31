use crate::error::ParseMalwareError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Static description of one malware archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MalwareProfile {
    pub title: &'static str,
    pub description: &'static str,
    pub behavior: &'static str,
    pub color_rgb: [u8; 3],
    /// Pause between the end of one infection and the next scan.
    pub spread_delay_ms: u64,
}

macro_rules! register_malware {
    ($($variant:ident => $key:literal {
        title: $title:expr,
        description: $description:expr,
        behavior: $behavior:expr,
        color: $color:expr,
        spread_delay_ms: $delay:expr $(,)?
    }),* $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum MalwareKind {
            $($variant),*
        }

        impl MalwareKind {
            pub const ALL: &'static [MalwareKind] = &[$(MalwareKind::$variant),*];

            pub fn key(self) -> &'static str {
                match self {
                    $(MalwareKind::$variant => $key),*
                }
            }

            pub fn profile(self) -> &'static MalwareProfile {
                match self {
                    $(MalwareKind::$variant => {
                        static PROFILE: MalwareProfile = MalwareProfile {
                            title: $title,
                            description: $description,
                            behavior: $behavior,
                            color_rgb: $color,
                            spread_delay_ms: $delay,
                        };
                        &PROFILE
                    }),*
                }
            }
        }

        impl FromStr for MalwareKind {
            type Err = ParseMalwareError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($key => Ok(MalwareKind::$variant),)*
                    other => Err(ParseMalwareError(other.to_string())),
                }
            }
        }
    };
}

register_malware!(
    Virus => "virus" {
        title: "VIRUS SIMULATION",
        description: "A computer virus attaches itself to programs or files and replicates when executed. \
            It requires user action to spread and can corrupt or delete data, modify system files, or steal information.",
        behavior: "The virus spreads through file sharing and execution. Each infected node can transmit to \
            connected nodes when files are accessed. Propagation is slower but can remain dormant for extended periods.",
        color: [255, 0, 110],
        spread_delay_ms: 1500,
    },
    Worm => "worm" {
        title: "WORM SIMULATION",
        description: "Worms are self-replicating malware that spread autonomously across networks without user \
            interaction, exploiting vulnerabilities in network protocols and system services.",
        behavior: "The worm automatically scans for vulnerable systems and spreads rapidly through network \
            connections without requiring user action. It can consume bandwidth and system resources quickly.",
        color: [0, 224, 255],
        spread_delay_ms: 800,
    },
    Trojan => "trojan" {
        title: "TROJAN SIMULATION",
        description: "Trojans disguise themselves as legitimate software to trick users into installation, then \
            perform malicious actions while appearing normal. They often create backdoors for remote access.",
        behavior: "The trojan appears as a trusted application but secretly establishes backdoor access and \
            spreads through social engineering. It operates stealthily to avoid detection by security systems.",
        color: [255, 165, 0],
        spread_delay_ms: 2000,
    },
);

impl fmt::Display for MalwareKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// `(kind, title, rgb)` for every archetype, in catalogue order.
pub fn get_catalogue() -> Vec<(MalwareKind, &'static str, [u8; 3])> {
    MalwareKind::ALL
        .iter()
        .map(|kind| {
            let profile = kind.profile();
            (*kind, profile.title, profile.color_rgb)
        })
        .collect()
}
