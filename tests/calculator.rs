use std::fs;

use setcalc::get_output;
use walkdir::WalkDir;

#[test]
fn corpus_cases_match_expected_output() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "in"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                           panic!("Failed to read {expected_path:?}: {e}")
                       });

        count += 1;
        match get_output(&source) {
            Ok(output) => assert_eq!(output,
                                     expected.trim_end_matches('\n'),
                                     "wrong output for case {path:?}"),
            Err(e) => panic!("Case {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn assert_output(source: &str, expected: &str) {
    match get_output(source) {
        Ok(output) => assert_eq!(output, expected, "wrong output for input:\n{source}"),
        Err(e) => panic!("Input failed:\n{source}\nError: {e}"),
    }
}

fn assert_failure(source: &str) {
    if get_output(source).is_ok() {
        panic!("Input succeeded but was expected to fail:\n{source}")
    }
}

#[test]
fn declarations_echo_and_card() {
    assert_output("U a b c\nS a b\nC card 2", "U a b c\nS a b\n2");
    assert_output("U a b\nC card 1", "U a b\n2");
    assert_output("U\nC card 1", "U\n0");
}

#[test]
fn relation_echo_keeps_pair_order() {
    assert_output("U a b\nR (b a) (a b)\nC symmetric 2",
                  "U a b\nR (b a) (a b)\ntrue");
}

#[test]
fn empty_and_complement() {
    assert_output("U a b\nS\nC empty 2\nC empty 1", "U a b\nS\ntrue\nfalse");
    assert_output("U a b c\nS a b\nC complement 2", "U a b c\nS a b\nS c");
    assert_output("U a b\nC complement 1", "U a b\nS");
}

#[test]
fn union_intersect_minus_keep_declaration_order() {
    assert_output("U a b c d\nS a b\nS b c\nC union 2 3\nC intersect 2 3\nC minus 2 3",
                  "U a b c d\nS a b\nS b c\nS a b c\nS b\nS a");
}

#[test]
fn inclusion_predicates() {
    assert_output("U a b\nS a\nS a b\nC subseteq 2 3\nC subseteq 3 2\nC subset 2 3",
                  "U a b\nS a\nS a b\ntrue\nfalse\ntrue");
    // A set includes itself, but never properly.
    assert_output("U a\nS a\nC subseteq 2 2\nC subset 2 2", "U a\nS a\ntrue\nfalse");
}

#[test]
fn inclusion_with_empty_operands() {
    // No proper subset of the empty set exists, not even the empty set.
    assert_output("U a\nS\nS\nC subseteq 2 3\nC subset 2 3\nC equals 2 3",
                  "U a\nS\nS\ntrue\nfalse\ntrue");
    assert_output("U a\nS a\nS\nC subseteq 2 3\nC subset 3 2",
                  "U a\nS a\nS\nfalse\ntrue");
}

#[test]
fn equality_ignores_order() {
    assert_output("U a b\nS a b\nS b a\nC equals 2 3", "U a b\nS a b\nS b a\ntrue");
    assert_output("U a b\nS a\nS b\nC equals 2 3", "U a b\nS a\nS b\nfalse");
}

#[test]
fn reflexivity_counts_self_pairs() {
    assert_output("U a b\nR (a a) (b b)\nC reflexive 2", "U a b\nR (a a) (b b)\ntrue");
    assert_output("U a b\nR (a a) (a b)\nC reflexive 2", "U a b\nR (a a) (a b)\nfalse");
    // An empty relation over an empty universe is reflexive.
    assert_output("U\nR\nC reflexive 2", "U\nR\ntrue");
}

#[test]
fn symmetry_and_antisymmetry_skip_self_pairs() {
    assert_output("U a b\nR (a b) (b a)\nC symmetric 2\nC antisymmetric 2",
                  "U a b\nR (a b) (b a)\ntrue\nfalse");
    assert_output("U a b\nR (a a) (a b)\nC symmetric 2\nC antisymmetric 2",
                  "U a b\nR (a a) (a b)\nfalse\ntrue");
}

#[test]
fn transitivity() {
    assert_output("U a b c\nR (a b) (b c)\nC transitive 2",
                  "U a b c\nR (a b) (b c)\nfalse");
    assert_output("U a b c\nR (a b) (b c) (a c)\nC transitive 2",
                  "U a b c\nR (a b) (b c) (a c)\ntrue");
    // Vacuously transitive: no pairs at all, or self-pairs only.
    assert_output("U a\nR\nC transitive 2", "U a\nR\ntrue");
    assert_output("U a b\nR (a a) (b b)\nC transitive 2", "U a b\nR (a a) (b b)\ntrue");
}

#[test]
fn function_property() {
    assert_output("U a b c\nR (a b) (b c)\nC function 2", "U a b c\nR (a b) (b c)\ntrue");
    assert_output("U a b c\nR (a b) (a c)\nC function 2", "U a b c\nR (a b) (a c)\nfalse");
}

#[test]
fn domain_and_codomain_follow_universe_order() {
    assert_output("U a b c\nR (b c) (a b)\nC domain 2\nC codomain 2",
                  "U a b c\nR (b c) (a b)\nS a b\nS b c");
    assert_output("U a b\nR\nC domain 2\nC codomain 2", "U a b\nR\nS\nS");
}

#[test]
fn injective_mappings() {
    assert_output("U a b c d\nS a b\nS c d\nR (a c) (b d)\nC injective 4 2 3\nC bijective 4 2 3",
                  "U a b c d\nS a b\nS c d\nR (a c) (b d)\ntrue\ntrue");
    // Two sources collide on one target.
    assert_output("U a b c\nS a b\nS c\nR (a c) (b c)\nC injective 4 2 3",
                  "U a b c\nS a b\nS c\nR (a c) (b c)\nfalse");
    // A pair component outside the candidate domain fails all three.
    assert_output("U a b c\nS a\nS c\nR (b c)\nC injective 4 2 3\nC surjective 4 2 3\nC bijective 4 2 3",
                  "U a b c\nS a\nS c\nR (b c)\nfalse\nfalse\nfalse");
}

#[test]
fn surjective_does_not_check_codomain_coverage() {
    // `c` is never hit, yet the mapping passes: coverage of the second set
    // is not part of the rule.
    assert_output("U a b c\nS a\nS b c\nR (a b)\nC surjective 4 2 3\nC bijective 4 2 3",
                  "U a b c\nS a\nS b c\nR (a b)\ntrue\ntrue");
    // The function requirement still applies.
    assert_output("U a b c\nS a b\nS c\nR (a c) (b c)\nC surjective 4 2 3",
                  "U a b c\nS a b\nS c\nR (a c) (b c)\ntrue");
    assert_output("U a b c\nS a\nS b c\nR (a b) (a c)\nC surjective 4 2 3",
                  "U a b c\nS a\nS b c\nR (a b) (a c)\nfalse");
}

#[test]
fn malformed_operand_tokens_are_dropped_silently() {
    // Words, zeros and broken numbers never reach dispatch; only `2` does.
    assert_output("U a b c\nS a\nC card zero 0 2", "U a b c\nS a\n1");
    assert_output("U a b\nS a\nC card 12abc 2", "U a b\nS a\n1");
    // Dropping every token leaves the wrong arity behind.
    assert_failure("U a b\nS a\nC card zero");
}

#[test]
fn universe_must_come_first_and_only_once() {
    assert_failure("S a\nC card 1");
    assert_failure("R (a a)\nC card 1");
    assert_failure("C card 1");
    assert_failure("U a\nU a\nC card 1");
}

#[test]
fn declarations_after_commands_are_rejected() {
    assert_failure("U a b\nC card 1\nS a");
    assert_failure("U a b\nC card 1\nR (a b)");
}

#[test]
fn input_must_contain_a_command() {
    assert_failure("");
    assert_failure("U a");
    assert_failure("U a\nS a\nR (a a)");
}

#[test]
fn line_shape_violations() {
    assert_failure("U a\nX b\nC card 1");
    assert_failure("Ua\nC card 1");
    assert_failure("U a \nC card 1");
    assert_failure("U a  b\nC card 1");
    assert_failure("U a\n\nC card 1");
}

#[test]
fn element_rule_violations() {
    assert_failure("U a1\nC card 1");
    assert_failure("U a\nS (a)\nC card 2");
    assert_failure("U card\nC empty 1");
    assert_failure("U a\nS a\nR (true a)\nC card 2");
    assert_failure(&format!("U {}\nC card 1", "a".repeat(31)));
    assert_failure("U a a\nC card 1");
    assert_failure("U a b\nS c\nC card 2");
}

#[test]
fn thirty_character_elements_are_accepted() {
    let name = "a".repeat(30);
    assert_output(&format!("U {name}\nC card 1"), &format!("U {name}\n1"));
}

#[test]
fn pair_rule_violations() {
    assert_failure("U a b\nR (a b) (a b)\nC symmetric 2");
    assert_failure("U a b\nR (a c)\nC symmetric 2");
    assert_failure("U a b\nR a b\nC symmetric 2");
    assert_failure("U a b\nR (a\nC symmetric 2");
    assert_failure("U a b\nR (a b\nC symmetric 2");
    assert_failure("U a b\nR (a b))\nC symmetric 2");
}

#[test]
fn unrecognized_commands_are_rejected() {
    assert_failure("U a\nC frobnicate 1");
    assert_failure("U a\nC union 1");
    assert_failure("U a\nC card");
    assert_failure("U a\nC");
    // Kind mismatches: a relation where a set is needed and vice versa.
    assert_failure("U a\nR (a a)\nC card 2");
    assert_failure("U a\nS a\nC symmetric 2");
    // Command lines occupy table positions but never satisfy an operand.
    assert_failure("U a\nC card 1\nC card 2");
}

#[test]
fn references_are_range_checked() {
    assert_failure("U a\nC card 5");
    assert_failure("U a\nC card -1");
    // A command cannot reference its own position.
    assert_failure("U a\nC card 2");
}

#[test]
fn table_capacity_is_bounded() {
    let mut source = String::from("U a");
    for _ in 0..998 {
        source.push_str("\nS a");
    }
    source.push_str("\nC card 1");
    let output = get_output(&source).expect("1000 lines fit the table");
    assert!(output.ends_with("\n1"));

    let mut source = String::from("U a");
    for _ in 0..999 {
        source.push_str("\nS a");
    }
    source.push_str("\nC card 1");
    assert_failure(&source);
}

mod properties {
    use setcalc::{
        ast::Set,
        interpreter::{evaluator::set_ops, value::Value},
    };

    fn set(names: &[&str]) -> Set {
        Set::new(names.iter().map(ToString::to_string).collect())
    }

    #[test]
    fn complement_is_an_involution() {
        let universe = set(&["a", "b", "c", "d"]);
        let inner = set(&["b", "d"]);

        let Value::Set(complemented) = set_ops::complement(&inner, &universe) else {
            panic!("complement must produce a set")
        };
        let Value::Set(back) = set_ops::complement(&complemented, &universe) else {
            panic!("complement must produce a set")
        };

        assert_eq!(set_ops::equals(&back, &inner), Value::Bool(true));
    }

    #[test]
    fn union_cardinality_matches_inclusion_exclusion() {
        let first = set(&["a", "b", "c"]);
        let second = set(&["b", "c", "d"]);

        let Value::Set(union) = set_ops::union(&first, &second) else {
            panic!("union must produce a set")
        };
        let Value::Set(intersection) = set_ops::intersect(&first, &second) else {
            panic!("intersect must produce a set")
        };

        assert_eq!(union.len(), first.len() + second.len() - intersection.len());
    }

    #[test]
    fn equality_is_mutual_inclusion() {
        let first = set(&["a", "b"]);
        let second = set(&["b", "a"]);
        let third = set(&["a", "b", "c"]);

        assert_eq!(set_ops::equals(&first, &second), Value::Bool(true));
        assert_eq!(set_ops::subseteq(&first, &second), Value::Bool(true));
        assert_eq!(set_ops::subseteq(&second, &first), Value::Bool(true));

        // One-way inclusion is not enough.
        assert_eq!(set_ops::subseteq(&first, &third), Value::Bool(true));
        assert_eq!(set_ops::equals(&first, &third), Value::Bool(false));
    }
}
