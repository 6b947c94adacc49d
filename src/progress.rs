use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, IsTerminal};

/// Announced once the complex list of a neighborhood is known
pub fn found_line(complex_count: usize) -> String {
    format!(
        "총 {}개의 아파트 단지를 찾았습니다. 상세 정보를 수집합니다.",
        complex_count
    )
}

/// Printed for a complex whose detail was collected
pub fn collected_line(complex_name: &str, variant_count: usize) -> String {
    format!("- {} ({}개 평형) 정보 수집 완료", complex_name, variant_count)
}

/// Printed for a skipped complex
pub fn failed_line(label: &str) -> String {
    format!("- {}의 상세 정보 수집 실패", label)
}

/// Console reporting for a crawl run
pub struct ProgressManager {
    enabled: bool,
    quiet: bool,
}

impl ProgressManager {
    /// Create a new progress manager. Bars are only drawn on a terminal;
    /// `quiet` also silences the plain status lines.
    pub fn new(quiet: bool) -> Self {
        Self {
            enabled: !quiet && io::stdout().is_terminal(),
            quiet,
        }
    }

    /// No bars, no status lines
    pub fn silent() -> Self {
        Self::new(true)
    }

    /// Print a status line
    pub fn announce(&self, message: &str) {
        if !self.quiet {
            println!("{}", message);
        }
    }

    /// Create a progress bar over the complexes of a neighborhood
    pub fn create_complex_progress(&self, total: u64) -> ComplexProgress {
        let bar = if self.enabled {
            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg}\n{bar:40.cyan/blue} {pos}/{len} ({percent}%)")
                    .unwrap_or_else(|_| ProgressStyle::default_bar())
                    .progress_chars("█▓░"),
            );
            Some(pb)
        } else {
            None
        };

        ComplexProgress {
            bar,
            quiet: self.quiet,
        }
    }
}

/// Per-complex progress; status lines are printed above the bar
pub struct ComplexProgress {
    bar: Option<ProgressBar>,
    quiet: bool,
}

impl ComplexProgress {
    pub fn start(&self, label: &str) {
        if let Some(ref pb) = self.bar {
            pb.set_message(format!("{} 상세 정보 조회 중...", label));
        }
    }

    /// Print one line and advance
    pub fn complete(&self, line: &str) {
        match self.bar {
            Some(ref pb) => {
                pb.println(line);
                pb.inc(1);
            }
            None if !self.quiet => println!("{}", line),
            None => {}
        }
    }

    pub fn finish(&self) {
        if let Some(ref pb) = self.bar {
            pb.finish_and_clear();
        }
    }
}
