mod path_tests;

pub(crate) const SAMPLE: &str = include_str!("jmdict_sample.json");
