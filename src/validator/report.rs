use std::fmt;

#[cfg(feature = "colorized_output")]
use console::style;

/// Problems printed per failed check before the rest are summarised
const LISTED: usize = 5;

/// The validation steps, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// The snapshot file exists and deserializes
    Snapshot,
    /// The document UUID
    Identity,
    /// Minimum pixel metadata of every image
    Pixels,
    /// Identifier uniqueness, reference targets and map keys
    References,
}

impl Stage {
    /// Heading of the stage in a printed report
    pub fn title(self) -> &'static str {
        match self {
            Stage::Snapshot => "Snapshot",
            Stage::Identity => "Document identity",
            Stage::Pixels => "Pixels contract",
            Stage::References => "Cross references",
        }
    }
}

/// Outcome of one check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Nothing to report
    Passed,
    /// Suspicious but not invalid
    Warning(String),
    /// Every problem the check found, never empty
    Failed(Vec<String>),
}

/// One named check and its outcome
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationCheck {
    /// Step that ran the check
    pub stage: Stage,
    /// Check name, possibly carrying the number of items inspected
    pub name: String,
    /// Outcome
    pub status: CheckStatus,
}

/// Number of checks per outcome
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Checks that passed
    pub passed: usize,
    /// Checks that warned
    pub warnings: usize,
    /// Checks that failed
    pub failed: usize,
}

/// Every check run against one metadata document
#[derive(Debug)]
pub struct ValidationReport {
    /// Snapshot path or caller-supplied label
    pub source: String,
    /// Checks in the order they ran
    pub checks: Vec<ValidationCheck>,
}

impl ValidationReport {
    /// Start an empty report for `source`
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            checks: Vec::new(),
        }
    }

    pub(crate) fn pass(&mut self, stage: Stage, name: impl Into<String>) {
        self.push(stage, name, CheckStatus::Passed);
    }

    pub(crate) fn warn(&mut self, stage: Stage, name: impl Into<String>, message: impl Into<String>) {
        self.push(stage, name, CheckStatus::Warning(message.into()));
    }

    pub(crate) fn fail(&mut self, stage: Stage, name: impl Into<String>, problem: impl Into<String>) {
        self.push(stage, name, CheckStatus::Failed(vec![problem.into()]));
    }

    /// Record a check that passes exactly when `problems` is empty
    pub(crate) fn record(&mut self, stage: Stage, name: impl Into<String>, problems: Vec<String>) {
        if problems.is_empty() {
            self.pass(stage, name);
        } else {
            self.push(stage, name, CheckStatus::Failed(problems));
        }
    }

    fn push(&mut self, stage: Stage, name: impl Into<String>, status: CheckStatus) {
        self.checks.push(ValidationCheck {
            stage,
            name: name.into(),
            status,
        });
    }

    /// First check whose name starts with `prefix`
    pub fn check(&self, prefix: &str) -> Option<&ValidationCheck> {
        self.checks.iter().find(|c| c.name.starts_with(prefix))
    }

    /// Outcome counts
    pub fn tally(&self) -> Tally {
        self.checks
            .iter()
            .fold(Tally::default(), |mut tally, check| {
                match check.status {
                    CheckStatus::Passed => tally.passed += 1,
                    CheckStatus::Warning(_) => tally.warnings += 1,
                    CheckStatus::Failed(_) => tally.failed += 1,
                }
                tally
            })
    }

    /// True if any check failed
    pub fn has_failures(&self) -> bool {
        self.tally().failed > 0
    }

    /// True if any check warned
    pub fn has_warnings(&self) -> bool {
        self.tally().warnings > 0
    }

    /// The report with terminal colors when the `colorized_output` feature is on
    pub fn format_colored(&self) -> String {
        #[cfg(feature = "colorized_output")]
        {
            Rendered {
                report: self,
                paint: colored,
            }
            .to_string()
        }

        #[cfg(not(feature = "colorized_output"))]
        {
            self.to_string()
        }
    }

    fn render(&self, f: &mut fmt::Formatter<'_>, paint: Paint) -> fmt::Result {
        writeln!(f, "{}", paint(Tone::Heading, &format!("Validation of {}", self.source)))?;

        let mut stage = None;
        for check in &self.checks {
            if stage != Some(check.stage) {
                stage = Some(check.stage);
                writeln!(f)?;
                writeln!(f, "{}", paint(Tone::Heading, check.stage.title()))?;
            }
            match &check.status {
                CheckStatus::Passed => writeln!(f, "  {} {}", paint(Tone::Passed, "ok  "), check.name)?,
                CheckStatus::Warning(message) => {
                    writeln!(f, "  {} {}: {}", paint(Tone::Warning, "warn"), check.name, message)?
                }
                CheckStatus::Failed(problems) => {
                    writeln!(f, "  {} {}", paint(Tone::Failed, "FAIL"), check.name)?;
                    for problem in problems.iter().take(LISTED) {
                        writeln!(f, "         - {problem}")?;
                    }
                    if problems.len() > LISTED {
                        writeln!(f, "         ... and {} more", problems.len() - LISTED)?;
                    }
                }
            }
        }

        let tally = self.tally();
        let verdict = if tally.failed > 0 {
            paint(Tone::Failed, "FAILED")
        } else if tally.warnings > 0 {
            paint(Tone::Warning, "PASSED with warnings")
        } else {
            paint(Tone::Passed, "PASSED")
        };
        writeln!(f)?;
        writeln!(
            f,
            "{} passed, {} warnings, {} failed: {}",
            tally.passed, tally.warnings, tally.failed, verdict
        )
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f, plain)
    }
}

#[derive(Clone, Copy)]
enum Tone {
    Heading,
    Passed,
    Warning,
    Failed,
}

type Paint = fn(Tone, &str) -> String;

fn plain(_: Tone, text: &str) -> String {
    text.to_string()
}

#[cfg(feature = "colorized_output")]
fn colored(tone: Tone, text: &str) -> String {
    match tone {
        Tone::Heading => style(text).bold().cyan().to_string(),
        Tone::Passed => style(text).green().to_string(),
        Tone::Warning => style(text).yellow().to_string(),
        Tone::Failed => style(text).red().bold().to_string(),
    }
}

#[cfg(feature = "colorized_output")]
struct Rendered<'a> {
    report: &'a ValidationReport,
    paint: Paint,
}

#[cfg(feature = "colorized_output")]
impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.report.render(f, self.paint)
    }
}
