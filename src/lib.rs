// Skillmatch: text-similarity matching for a recruitment and learning platform.
//
// This is the library root. Each module corresponds to one stage of the
// matching pipeline (parse -> normalize -> vectorize -> rank) or to one of
// the standalone utilities (keyword extraction, skill gap comparison).

pub mod config;
pub mod corpus;
pub mod keywords;
pub mod matching;
pub mod output;
pub mod pipeline;
pub mod similarity;
pub mod skillgap;
pub mod text;
