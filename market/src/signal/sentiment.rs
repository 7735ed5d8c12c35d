//! Sentiment placeholder.
//!
//! Not real sentiment analysis. The trait is the seam: a genuine source
//! (news feed, social scoring) can replace [`RandomSentiment`] without
//! touching the cycle logic.

use std::fmt;

use rand::Rng;

use crate::types::Pair;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        })
    }
}

pub trait SentimentSource: Send {
    fn classify(&self, pair: &Pair) -> Sentiment;
}

/// Uniform random stub.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomSentiment;

impl SentimentSource for RandomSentiment {
    fn classify(&self, _pair: &Pair) -> Sentiment {
        match rand::thread_rng().gen_range(0..3) {
            0 => Sentiment::Positive,
            1 => Sentiment::Neutral,
            _ => Sentiment::Negative,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_source_stays_in_domain() {
        let source = RandomSentiment;
        let pair = Pair::normalize("BTCUSDT");
        for _ in 0..50 {
            // Any variant is fine; this pins the return type contract.
            let _ = source.classify(&pair);
        }
    }
}
