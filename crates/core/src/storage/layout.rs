use std::path::PathBuf;

// Fixed layout written by the prediction generator.
const PREDICTIONS_FILE: &str = "predictions/predictions.json";
const WEEKLY_REPORT_FILE: &str = "weekly_report/glide_weekly_report.json";
const HISTORICAL_DIR: &str = "historical_week";
const BACKTEST_FILE: &str = "backtest/backtest.json";
const ARCHIVES_DIR: &str = "archives";

#[derive(Debug, Clone)]
pub struct DataLayout {
    root: PathBuf,
}

impl DataLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn predictions_file(&self) -> PathBuf {
        self.root.join(PREDICTIONS_FILE)
    }

    pub fn weekly_report_file(&self) -> PathBuf {
        self.root.join(WEEKLY_REPORT_FILE)
    }

    pub fn historical_dir(&self) -> PathBuf {
        self.root.join(HISTORICAL_DIR)
    }

    pub fn backtest_file(&self) -> PathBuf {
        self.root.join(BACKTEST_FILE)
    }

    pub fn archives_dir(&self) -> PathBuf {
        self.root.join(ARCHIVES_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_rooted_at_data_dir() {
        let layout = DataLayout::new("/srv/glide");
        assert_eq!(
            layout.predictions_file(),
            PathBuf::from("/srv/glide/predictions/predictions.json")
        );
        assert_eq!(layout.archives_dir(), PathBuf::from("/srv/glide/archives"));
    }
}
