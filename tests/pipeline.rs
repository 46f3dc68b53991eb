use std::fs;

use jargon_wordlist::filter::NoiseFilter;
use jargon_wordlist::output::Artifact;
use jargon_wordlist::pipeline::{generate, Pipeline, PipelineConfig};
use jargon_wordlist::tokenize::tokenize;
use jargon_wordlist::{classify, filter_noise, load_corpus};
use proptest::prelude::*;
use tempfile::TempDir;

fn lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        Vec::new()
    } else {
        text.split('\n').collect()
    }
}

fn assert_sorted_unique(list: &[&str]) {
    for pair in list.windows(2) {
        assert!(pair[0] < pair[1], "{:?} not strictly ascending", pair);
    }
}

#[test]
fn scenario_kernel_identifier() {
    let generated = generate(["ioctl_deallocate_iso_resource"], '_', &NoiseFilter::default());

    assert_eq!(
        generated.terms.sorted(),
        vec!["deallocate", "ioctl", "iso", "resource"]
    );
    assert_eq!(generated.classified.variable.len(), 4);
    assert_eq!(generated.render(Artifact::Const), "");
}

#[test]
fn scenario_mixed_corpus_end_to_end() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out");
    let input = dir.path().join("kallsyms.txt");
    fs::write(
        &input,
        "a__b\r\nABC123\r\nAB1234X\r\nX1\r\nioctl_deallocate_iso_resource\r\n",
    )
    .unwrap();

    let config = PipelineConfig {
        input: input.clone(),
        output_dir: out.clone(),
        quiet: true,
        ..PipelineConfig::default()
    };
    Pipeline::new(config).run().unwrap();

    assert_eq!(
        fs::read_to_string(out.join("terms.txt")).unwrap(),
        "ABC123\nX1\na\nb\ndeallocate\nioctl\niso\nresource"
    );
    assert_eq!(
        fs::read_to_string(out.join("vars.txt")).unwrap(),
        "a\nb\ndeallocate\nioctl\niso\nresource"
    );
    assert_eq!(
        fs::read_to_string(out.join("const.txt")).unwrap(),
        "ABC123\nX1"
    );

    // Stages composed by hand give the same lists
    let records = load_corpus(&input).unwrap();
    let filtered = filter_noise(tokenize(&records, '_'), &NoiseFilter::default());
    let classified = classify(&filtered);
    assert_eq!(filtered.sorted(), lines("ABC123\nX1\na\nb\ndeallocate\nioctl\niso\nresource"));
    assert_eq!(classified.constant.sorted(), vec!["ABC123", "X1"]);
}

fn name_strategy() -> impl Strategy<Value = String> {
    // Identifier-ish names with digits, both cases, runs of delimiters
    proptest::string::string_regex("[a-zA-Z0-9_]{0,24}").unwrap()
}

proptest! {
    #[test]
    fn wordlists_hold_invariants(names in proptest::collection::vec(name_strategy(), 0..40)) {
        let filter = NoiseFilter::default();
        let generated = generate(&names, '_', &filter);

        let terms_text = generated.render(Artifact::Terms);
        let vars_text = generated.render(Artifact::Vars);
        let const_text = generated.render(Artifact::Const);
        let terms = lines(&terms_text);
        let vars = lines(&vars_text);
        let consts = lines(&const_text);

        prop_assert!(!generated.terms.contains(""));
        for list in [&terms, &vars, &consts] {
            prop_assert!(!list.contains(&""));
            assert_sorted_unique(list);
        }

        // Buckets partition the retained terms
        prop_assert_eq!(vars.len() + consts.len(), terms.len());
        for term in &terms {
            prop_assert!(vars.contains(term) != consts.contains(term));
        }

        // Short terms are never filtered
        for name in &names {
            for term in name.split('_') {
                if !term.is_empty() && term.chars().count() <= 3 {
                    prop_assert!(generated.terms.contains(term));
                }
            }
        }
    }

    #[test]
    fn generation_is_deterministic(names in proptest::collection::vec(name_strategy(), 0..40)) {
        let filter = NoiseFilter::default();
        let first = generate(&names, '_', &filter);
        let second = generate(names.iter().rev(), '_', &filter);

        for artifact in Artifact::ALL {
            prop_assert_eq!(first.render(artifact), second.render(artifact));
        }
    }
}
