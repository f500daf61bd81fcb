use setcon_expr::{atom, inclusion, set_variable};
use setcon_graph::EdgeLabel;

use super::{Affected, Builder};
use crate::options::SolveOptions;

fn builder() -> Builder<&'static str, &'static str> {
    Builder::new(SolveOptions::default())
}

#[test]
fn var_var_dispatches_by_lexical_order_of_the_endpoints() {
    let mut b = builder();
    let mut affected = Affected::new();
    b.add_inclusion(
        true,
        &mut affected,
        &inclusion(set_variable("a"), set_variable("b")),
    );

    let a = b.lookup(&set_variable("a")).unwrap();
    let c = b.lookup(&set_variable("b")).unwrap();
    assert!(b.graph().edge_labelled(a, c, EdgeLabel::Pred));
    assert!(!b.graph().edge_labelled(a, c, EdgeLabel::Succ));
}

#[test]
fn var_var_reverse_order_dispatches_to_succ() {
    let mut b = builder();
    let mut affected = Affected::new();
    b.add_inclusion(
        true,
        &mut affected,
        &inclusion(set_variable("b"), set_variable("a")),
    );

    let bid = b.lookup(&set_variable("b")).unwrap();
    let aid = b.lookup(&set_variable("a")).unwrap();
    assert!(b.graph().edge_labelled(bid, aid, EdgeLabel::Succ));
}

#[test]
fn term_var_dispatches_to_pred() {
    let mut b = builder();
    let mut affected = Affected::new();
    b.add_inclusion(
        true,
        &mut affected,
        &inclusion(atom("c"), set_variable("x")),
    );

    let c = b.lookup(&atom("c")).unwrap();
    let x = b.lookup(&set_variable("x")).unwrap();
    assert!(b.graph().edge_labelled(c, x, EdgeLabel::Pred));
}

#[test]
fn var_term_dispatches_to_succ() {
    let mut b = builder();
    let mut affected = Affected::new();
    b.add_inclusion(
        true,
        &mut affected,
        &inclusion(set_variable("x"), atom("c")),
    );

    let x = b.lookup(&set_variable("x")).unwrap();
    let c = b.lookup(&atom("c")).unwrap();
    assert!(b.graph().edge_labelled(x, c, EdgeLabel::Succ));
}

#[test]
#[should_panic(expected = "A ⊆ A")]
fn var_equal_var_panics() {
    let mut b = builder();
    let mut affected = Affected::new();
    b.add_inclusion(
        true,
        &mut affected,
        &inclusion(set_variable("x"), set_variable("x")),
    );
}

#[test]
#[should_panic(expected = "ill-formed")]
fn non_atomic_shape_panics() {
    use setcon_expr::{empty_set, universal_set};

    let mut b = builder();
    let mut affected = Affected::new();
    b.add_inclusion(
        true,
        &mut affected,
        &inclusion(empty_set(), universal_set::<&str, &str>()),
    );
}

#[test]
fn a_two_cycle_collapses_both_variables_to_one_node() {
    // atom(a) ⊆ x, x ⊆ y, y ⊆ x: the last edge closes a cycle and should
    // collapse x and y down to a single representative node.
    let mut b = builder();
    b.insert_all(&[
        inclusion(atom("a"), set_variable("x")),
        inclusion(set_variable("x"), set_variable("y")),
        inclusion(set_variable("y"), set_variable("x")),
    ]);

    let x = b.lookup(&set_variable("x")).unwrap();
    let y = b.lookup(&set_variable("y")).unwrap();
    assert_eq!(x, y, "x and y must collapse to the same representative");

    let a = b.lookup(&atom("a")).unwrap();
    assert!(b.graph().edge_labelled(a, x, EdgeLabel::Pred));
}

#[test]
fn insert_all_is_idempotent_on_a_repeated_inclusion() {
    let mut b = builder();
    let incl = inclusion(set_variable("x"), set_variable("y"));
    b.insert_all(&[incl.clone(), incl]);

    assert_eq!(b.graph().edge_count(), 1);
}
