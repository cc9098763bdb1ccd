use match_replay::RoundOutcome;

use crate::cli::Cli;

/// Glyph per round outcome, from the perspective of the row it is drawn in
pub struct OutcomeGlyphs {
    pub mutual_defection: char,
    pub exploited_loss: char,
    pub exploited_win: char,
    pub mutual_cooperation: char,
}

impl Default for OutcomeGlyphs {
    fn default() -> Self {
        Self {
            mutual_defection: '-',
            exploited_loss: 'x',
            exploited_win: '!',
            mutual_cooperation: '+',
        }
    }
}

impl OutcomeGlyphs {
    pub fn glyph(&self, outcome: RoundOutcome) -> char {
        match outcome {
            RoundOutcome::MutualDefection => self.mutual_defection,
            RoundOutcome::ExploitedLoss => self.exploited_loss,
            RoundOutcome::ExploitedWin => self.exploited_win,
            RoundOutcome::MutualCooperation => self.mutual_cooperation,
        }
    }
}

pub struct ViewerConfig {
    pub precision: usize,
    pub show_matchups: bool,
    pub glyphs: OutcomeGlyphs,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            precision: 3,
            show_matchups: true,
            glyphs: OutcomeGlyphs::default(),
        }
    }
}

impl ViewerConfig {
    /// Defaults overridden by whatever was given on the command line
    pub fn from_cli(cli: &Cli) -> Self {
        let defaults = Self::default();
        Self {
            precision: cli.precision.unwrap_or(defaults.precision),
            show_matchups: !cli.leaderboard_only,
            ..defaults
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = ViewerConfig::default();
        assert_eq!(config.precision, 3);
        assert!(config.show_matchups);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(["results-viewer", "r.json", "--precision", "1", "--leaderboard-only"]);
        let config = ViewerConfig::from_cli(&cli);
        assert_eq!(config.precision, 1);
        assert!(!config.show_matchups);

        let cli = Cli::parse_from(["results-viewer", "r.json"]);
        assert_eq!(ViewerConfig::from_cli(&cli).precision, 3);
    }

    #[test]
    fn test_glyphs_distinct() {
        let glyphs = OutcomeGlyphs::default();
        let all = [
            glyphs.glyph(RoundOutcome::MutualDefection),
            glyphs.glyph(RoundOutcome::ExploitedLoss),
            glyphs.glyph(RoundOutcome::ExploitedWin),
            glyphs.glyph(RoundOutcome::MutualCooperation),
        ];
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
