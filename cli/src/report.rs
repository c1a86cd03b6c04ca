use image_converter_core::{BatchOutcome, Delivery};

/// Per-file summary for the end-of-run report.
pub struct FileSummary {
    pub source: String,
    pub artifacts: usize,
    pub output_bytes: u64,
}

pub struct Report {
    pub results: Vec<FileSummary>,
}

impl Report {
    pub fn from_outcome(outcome: &BatchOutcome) -> Self {
        let results = outcome
            .files
            .iter()
            .map(|f| FileSummary {
                source: f.source.clone(),
                artifacts: f.artifacts.len(),
                output_bytes: f.artifacts.iter().map(|a| a.data.len() as u64).sum(),
            })
            .collect();
        Self { results }
    }

    pub fn total_bytes(&self) -> u64 {
        self.results.iter().map(|r| r.output_bytes).sum()
    }

    pub fn total_artifacts(&self) -> usize {
        self.results.iter().map(|r| r.artifacts).sum()
    }

    pub fn print_summary(&self, delivery: &Delivery) {
        println!("\n--- Summary ---");
        for r in &self.results {
            println!(
                "  {} → {} artifact(s), {}",
                r.source,
                r.artifacts,
                format_size(r.output_bytes)
            );
        }
        println!(
            "Converted {} file(s) into {} artifact(s) ({})",
            self.results.len(),
            self.total_artifacts(),
            format_size(self.total_bytes())
        );
        match delivery {
            Delivery::Single { name, .. } => println!("Output: {name}"),
            Delivery::Archive { name, data } => {
                println!("Output: {name} ({})", format_size(data.len() as u64))
            }
        }
    }
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = 1024 * KB;
    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.0 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
    }
}
