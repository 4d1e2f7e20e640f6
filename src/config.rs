use std::path::PathBuf;

use clap::Parser;

pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 60;

/// unbounded game of life with a navigable history of generations.
#[derive(Parser, Debug)]
#[command(name = "lifeline", version)]
pub struct Args {
    /// pattern files merged into the initial generation
    pub patterns: Vec<PathBuf>,

    /// playback speed, one generation every `fps / speed` frames
    #[arg(long, default_value_t = 7, value_parser = clap::value_parser!(u32).range(1..=60))]
    pub speed: u32,

    /// viewer refresh rate
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..=240))]
    pub fps: u32,

    /// start playing right away
    #[arg(long)]
    pub play: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["lifeline"]);
        assert!(args.patterns.is_empty());
        assert_eq!(args.speed, 7);
        assert_eq!(args.fps, 60);
        assert!(!args.play);
    }

    #[test]
    fn patterns_and_flags() {
        let args = Args::parse_from(["lifeline", "a.txt", "b.txt", "--speed", "12", "--play"]);
        assert_eq!(args.patterns, [PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(args.speed, 12);
        assert!(args.play);
    }

    #[test]
    fn speed_out_of_range() {
        assert!(Args::try_parse_from(["lifeline", "--speed", "0"]).is_err());
        assert!(Args::try_parse_from(["lifeline", "--speed", "61"]).is_err());
    }
}
