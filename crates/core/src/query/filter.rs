use crate::domain::{field_text, Record};

/// Optional `game`/`date` narrowing shared by every endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    game: Option<String>,
    date: Option<String>,
}

impl RecordFilter {
    /// Empty parameters are treated the same as absent ones.
    pub fn new(game: Option<&str>, date: Option<&str>) -> Self {
        Self {
            game: non_empty(game).map(str::to_lowercase),
            date: non_empty(date).map(str::to_string),
        }
    }

    pub fn by_game(game: Option<&str>) -> Self {
        Self::new(game, None)
    }

    pub fn is_empty(&self) -> bool {
        self.game.is_none() && self.date.is_none()
    }

    pub fn matches_game(&self, record: &Record) -> bool {
        match &self.game {
            Some(game) => field_text(record, "game").to_lowercase() == *game,
            None => true,
        }
    }

    pub fn matches_date(&self, record: &Record) -> bool {
        match &self.date {
            Some(date) => field_text(record, "date") == date.as_str(),
            None => true,
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        self.matches_game(record) && self.matches_date(record)
    }

    /// Keep matching records in their original order.
    pub fn apply(&self, records: Vec<Record>) -> Vec<Record> {
        if self.is_empty() {
            return records;
        }
        records.into_iter().filter(|r| self.matches(r)).collect()
    }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records() -> Vec<Record> {
        vec![
            json!({"game": "Pick 3", "date": "2024-08-01"}),
            json!({"game": "pick 3", "date": "2024-08-02"}),
            json!({"game": "Powerball", "date": "2024-08-01"}),
            json!({"date": "2024-08-01"}),
            json!({"game": "PICK 3", "date": "2024-08-01"}),
        ]
    }

    #[test]
    fn no_filter_keeps_everything() {
        let filter = RecordFilter::new(None, Some(""));
        assert!(filter.is_empty());
        assert_eq!(filter.apply(records()).len(), 5);
    }

    #[test]
    fn game_match_ignores_case() {
        let out = RecordFilter::by_game(Some("pick 3")).apply(records());
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|r| r["game"].as_str().unwrap().eq_ignore_ascii_case("pick 3")));
    }

    #[test]
    fn missing_game_never_matches_a_named_game() {
        let out = RecordFilter::by_game(Some("Mega Millions")).apply(records());
        assert!(out.is_empty());
    }

    #[test]
    fn both_filters_preserve_order() {
        let out = RecordFilter::new(Some("PICK 3"), Some("2024-08-01")).apply(records());
        assert_eq!(
            out,
            vec![
                json!({"game": "Pick 3", "date": "2024-08-01"}),
                json!({"game": "PICK 3", "date": "2024-08-01"}),
            ]
        );
    }

    #[test]
    fn date_match_is_exact_string_equality() {
        let input = vec![
            json!({"game": "Pick 3", "date": "2024-8-1"}),
            json!({"game": "Pick 3", "date": "2024-08-01T00:00:00"}),
            json!({"game": "Pick 3", "date": "2024-08-01"}),
        ];
        let out = RecordFilter::new(None, Some("2024-08-01")).apply(input);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn filter_order_does_not_change_result() {
        let filter = RecordFilter::new(Some("pick 3"), Some("2024-08-01"));
        let game_first: Vec<_> = records()
            .into_iter()
            .filter(|r| filter.matches_game(r))
            .filter(|r| filter.matches_date(r))
            .collect();
        let date_first: Vec<_> = records()
            .into_iter()
            .filter(|r| filter.matches_date(r))
            .filter(|r| filter.matches_game(r))
            .collect();
        assert_eq!(game_first, date_first);
        assert_eq!(filter.apply(records()), game_first);
    }
}
