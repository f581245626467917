//! Linguistic variables and fuzzification.
//!
//! Each variable has exactly three terms. Terms sitting on a domain edge with a vertical flank
//! there (`a == b` at the lower bound, `c == d` at the upper bound) act as open shoulders: they
//! hold full membership at and beyond that edge, so the closed domain has no dead zone.

use crate::knowledge::KnowledgeBase;
use crate::membership::MembershipFunction;
use crate::normalizer::Normalized;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;
use strum::IntoEnumIterator;
use strum_macros::{EnumIter, IntoStaticStr};

/// Number of terms per linguistic variable.
pub const TERMS: usize = 3;

/// A named term of one linguistic variable.
pub trait Term: Copy + fmt::Debug + IntoEnumIterator + Into<&'static str> + 'static {
    /// Position of the term's curve in [`LinguisticVariable::terms`].
    fn index(self) -> usize;

    fn name(self) -> &'static str {
        self.into()
    }
}

macro_rules! linguistic_terms {
    ($(#[$meta:meta])* $name:ident { $($variant:ident),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
        #[strum(serialize_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl Term for $name {
            fn index(self) -> usize {
                self as usize
            }
        }
    };
}

linguistic_terms!(
    /// Terms over the feather density score.
    FeatherTerm { Low, Medium, High }
);
linguistic_terms!(
    /// Terms over the ambient temperature in °C.
    TemperatureTerm { Cold, Optimal, Hot }
);
linguistic_terms!(
    /// Terms over the relative humidity in %.
    HumidityTerm { Low, Optimal, High }
);

/// A named axis with its domain and one curve per term, ordered like the term enum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct LinguisticVariable<T> {
    pub min: f64,
    pub max: f64,
    pub terms: [MembershipFunction; TERMS],
    #[serde(skip)]
    term: PhantomData<T>,
}

impl<T: Term> LinguisticVariable<T> {
    #[must_use]
    pub const fn new(min: f64, max: f64, terms: [MembershipFunction; TERMS]) -> Self {
        Self { min, max, terms, term: PhantomData }
    }

    #[must_use]
    pub fn function(&self, term: T) -> &MembershipFunction {
        &self.terms[term.index()]
    }

    /// Membership of `x` in `term`, honouring open shoulders at the domain edges.
    #[must_use]
    pub fn degree(&self, term: T, x: f64) -> f64 {
        let mf = self.function(term);
        let open_left = mf.a == mf.b && mf.a <= self.min;
        let open_right = mf.c == mf.end() && mf.c >= self.max;

        if (open_left && x <= mf.a) || (open_right && x >= mf.c) {
            return 1.0;
        }
        mf.degree(x)
    }

    #[must_use]
    pub fn fuzzify(&self, x: f64) -> Memberships<T> {
        let mut degrees = [0.0; TERMS];
        for term in T::iter() {
            degrees[term.index()] = self.degree(term, x);
        }
        Memberships { degrees, term: PhantomData }
    }
}

/// Membership degrees of one crisp value in every term of a variable.
#[derive(Clone, Copy, PartialEq)]
pub struct Memberships<T> {
    degrees: [f64; TERMS],
    term: PhantomData<T>,
}

impl<T: Term> Memberships<T> {
    #[must_use]
    pub fn get(&self, term: T) -> f64 {
        self.degrees[term.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (T, f64)> + '_ {
        T::iter().map(|term| (term, self.get(term)))
    }

    /// `true` when at least one term holds with a positive degree.
    #[must_use]
    pub fn is_covered(&self) -> bool {
        self.degrees.iter().any(|d| *d > 0.0)
    }
}

impl<T: Term> fmt::Debug for Memberships<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter().map(|(term, degree)| (term.name(), degree))).finish()
    }
}

/// Memberships of all supplied inputs. Humidity is absent when no reading was given.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fuzzified {
    pub feather_density: Memberships<FeatherTerm>,
    pub temperature: Memberships<TemperatureTerm>,
    pub humidity: Option<Memberships<HumidityTerm>>,
}

/// Fuzzifies the feather density score, the raw temperature and the raw humidity (if any).
#[must_use]
pub fn fuzzify(kb: &KnowledgeBase, normalized: &Normalized) -> Fuzzified {
    Fuzzified {
        feather_density: kb.feather_density.fuzzify(normalized.fds),
        temperature: kb.temperature.fuzzify(normalized.temperature),
        humidity: normalized.humidity.map(|h| kb.humidity.fuzzify(h)),
    }
}
