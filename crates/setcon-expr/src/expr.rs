use std::fmt;

/// Per-argument covariance/contravariance annotation of a constructor.
///
/// Determines whether term/term decomposition (§4.2) preserves or reverses
/// the inclusion direction at a given argument position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Variance {
    Covariant,
    Contravariant,
}

/// A set expression: the universally-smallest/largest sets, a set
/// variable, or an application of a labelled, signed constructor to its
/// children.
///
/// Equality and ordering are structural and deterministic given the same
/// ordering on `V` and `C` — the Builder (in `setcon-solve`) relies on this
/// to use `SetExpression` as a `BTreeMap` key without requiring `Hash` on
/// the caller's key types (see `spec.md` §9, "Polymorphism over V and C").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SetExpression<V, C> {
    EmptySet,
    UniversalSet,
    SetVariable(V),
    ConstructedTerm {
        constructor: C,
        signature: Vec<Variance>,
        children: Vec<SetExpression<V, C>>,
    },
}

impl<V, C> SetExpression<V, C> {
    pub fn is_empty_set(&self) -> bool {
        matches!(self, SetExpression::EmptySet)
    }

    pub fn is_universal_set(&self) -> bool {
        matches!(self, SetExpression::UniversalSet)
    }

    pub fn as_set_variable(&self) -> Option<&V> {
        match self {
            SetExpression::SetVariable(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_constructed_term(&self) -> Option<(&C, &[Variance], &[SetExpression<V, C>])> {
        match self {
            SetExpression::ConstructedTerm {
                constructor,
                signature,
                children,
            } => Some((constructor, signature, children)),
            _ => None,
        }
    }
}

/// Two constructed terms are compatible only when constructor label,
/// arity, and signature are all equal (§3).
pub fn compatible_terms<C: PartialEq>(
    c1: &C,
    sig1: &[Variance],
    c2: &C,
    sig2: &[Variance],
) -> bool {
    c1 == c2 && sig1 == sig2
}

impl<V: fmt::Display, C: fmt::Display> fmt::Display for SetExpression<V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetExpression::EmptySet => write!(f, "\u{2205}"),
            SetExpression::UniversalSet => write!(f, "U"),
            SetExpression::SetVariable(v) => write!(f, "{v}"),
            SetExpression::ConstructedTerm {
                constructor,
                children,
                ..
            } => {
                write!(f, "{constructor}(")?;
                for (i, child) in children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// `∅`, the universally-smallest set.
pub fn empty_set<V, C>() -> SetExpression<V, C> {
    SetExpression::EmptySet
}

/// `U`, the universally-largest set.
pub fn universal_set<V, C>() -> SetExpression<V, C> {
    SetExpression::UniversalSet
}

/// A named set variable drawn from the caller's key type.
pub fn set_variable<V, C>(v: V) -> SetExpression<V, C> {
    SetExpression::SetVariable(v)
}

/// A zero-arity constructed term: `atom(c) == term(c, []).apply(vec![])`.
pub fn atom<V, C>(constructor: C) -> SetExpression<V, C> {
    SetExpression::ConstructedTerm {
        constructor,
        signature: Vec::new(),
        children: Vec::new(),
    }
}

/// A partially-applied constructor: fix the label and signature, then
/// apply to a list of children of matching length to get a
/// `ConstructedTerm`.
pub struct TermConstructor<C> {
    constructor: C,
    signature: Vec<Variance>,
}

impl<C: Clone> TermConstructor<C> {
    /// Apply this constructor to `children`.
    ///
    /// # Panics
    ///
    /// Panics if `children.len()` does not match the signature's arity —
    /// a programmer error (§7), never a recoverable `ConstraintError`.
    pub fn apply<V>(&self, children: Vec<SetExpression<V, C>>) -> SetExpression<V, C> {
        assert_eq!(
            children.len(),
            self.signature.len(),
            "constructor arity mismatch: signature has {} slots, got {} children",
            self.signature.len(),
            children.len(),
        );
        SetExpression::ConstructedTerm {
            constructor: self.constructor.clone(),
            signature: self.signature.clone(),
            children,
        }
    }
}

/// Build a `TermConstructor` for `constructor` with per-argument variance
/// `signature`.
pub fn term<C>(constructor: C, signature: Vec<Variance>) -> TermConstructor<C> {
    TermConstructor {
        constructor,
        signature,
    }
}
