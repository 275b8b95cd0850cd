//! The genetic-code table.
//!
//! A constant, total map from all 64 codons to their products: one of the
//! twenty amino-acid residues, or a stop. Exactly three codons are stops
//! (UAA, UAG, UGA) and AUG is the unique start marker, which still
//! translates to methionine: the start role is structural, not exclusive
//! of translation. Lookups never need a fallback path.

use serde::{Deserialize, Serialize};

use crate::core::Base;

/// One of the twenty amino acids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AminoAcid {
    Ala,
    Arg,
    Asn,
    Asp,
    Cys,
    Gln,
    Glu,
    Gly,
    His,
    Ile,
    Leu,
    Lys,
    Met,
    Phe,
    Pro,
    Ser,
    Thr,
    Trp,
    Tyr,
    Val,
}

impl AminoAcid {
    /// Standard one-letter code.
    #[must_use]
    pub const fn one_letter(self) -> char {
        match self {
            AminoAcid::Ala => 'A',
            AminoAcid::Arg => 'R',
            AminoAcid::Asn => 'N',
            AminoAcid::Asp => 'D',
            AminoAcid::Cys => 'C',
            AminoAcid::Gln => 'Q',
            AminoAcid::Glu => 'E',
            AminoAcid::Gly => 'G',
            AminoAcid::His => 'H',
            AminoAcid::Ile => 'I',
            AminoAcid::Leu => 'L',
            AminoAcid::Lys => 'K',
            AminoAcid::Met => 'M',
            AminoAcid::Phe => 'F',
            AminoAcid::Pro => 'P',
            AminoAcid::Ser => 'S',
            AminoAcid::Thr => 'T',
            AminoAcid::Trp => 'W',
            AminoAcid::Tyr => 'Y',
            AminoAcid::Val => 'V',
        }
    }
}

impl std::fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.one_letter())
    }
}

/// What a codon translates to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodonProduct {
    /// A residue appended to the output.
    Residue(AminoAcid),
    /// A terminator: translation ends here.
    Stop,
}

impl CodonProduct {
    /// Is this a terminator?
    #[must_use]
    pub const fn is_stop(self) -> bool {
        matches!(self, CodonProduct::Stop)
    }

    /// The residue, if any.
    #[must_use]
    pub const fn residue(self) -> Option<AminoAcid> {
        match self {
            CodonProduct::Residue(residue) => Some(residue),
            CodonProduct::Stop => None,
        }
    }
}

/// Three consecutive bases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Codon(pub [Base; 3]);

impl Codon {
    /// The canonical start marker, AUG.
    pub const START: Codon = Codon([Base::A, Base::U, Base::G]);

    /// Table index: bases read as digits in base 4.
    #[must_use]
    pub const fn index(self) -> usize {
        let [first, second, third] = self.0;
        first.index() * 16 + second.index() * 4 + third.index()
    }

    /// Look this codon up in the table.
    #[must_use]
    pub const fn product(self) -> CodonProduct {
        CODON_TABLE[self.index()]
    }

    /// Is this the start marker?
    #[must_use]
    pub const fn is_start(self) -> bool {
        self.index() == Self::START.index()
    }

    /// Is this a terminator?
    #[must_use]
    pub const fn is_stop(self) -> bool {
        self.product().is_stop()
    }
}

impl From<[Base; 3]> for Codon {
    fn from(bases: [Base; 3]) -> Self {
        Codon(bases)
    }
}

impl std::fmt::Display for Codon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [first, second, third] = self.0;
        write!(f, "{first}{second}{third}")
    }
}

/// Total table over all 64 codons, indexed by [`Codon::index`].
///
/// Rows fix the first two bases; the third varies A, C, G, U.
pub(crate) const CODON_TABLE: [CodonProduct; 64] = {
    use AminoAcid::*;
    use CodonProduct::Stop;

    const fn aa(residue: AminoAcid) -> CodonProduct {
        CodonProduct::Residue(residue)
    }

    [
        // AA-
        aa(Lys), aa(Asn), aa(Lys), aa(Asn),
        // AC-
        aa(Thr), aa(Thr), aa(Thr), aa(Thr),
        // AG-
        aa(Arg), aa(Ser), aa(Arg), aa(Ser),
        // AU-
        aa(Ile), aa(Ile), aa(Met), aa(Ile),
        // CA-
        aa(Gln), aa(His), aa(Gln), aa(His),
        // CC-
        aa(Pro), aa(Pro), aa(Pro), aa(Pro),
        // CG-
        aa(Arg), aa(Arg), aa(Arg), aa(Arg),
        // CU-
        aa(Leu), aa(Leu), aa(Leu), aa(Leu),
        // GA-
        aa(Glu), aa(Asp), aa(Glu), aa(Asp),
        // GC-
        aa(Ala), aa(Ala), aa(Ala), aa(Ala),
        // GG-
        aa(Gly), aa(Gly), aa(Gly), aa(Gly),
        // GU-
        aa(Val), aa(Val), aa(Val), aa(Val),
        // UA-
        Stop, aa(Tyr), Stop, aa(Tyr),
        // UC-
        aa(Ser), aa(Ser), aa(Ser), aa(Ser),
        // UG-
        Stop, aa(Cys), aa(Trp), aa(Cys),
        // UU-
        aa(Leu), aa(Phe), aa(Leu), aa(Phe),
    ]
};

#[cfg(test)]
mod tests {
    use super::*;

    fn all_codons() -> impl Iterator<Item = Codon> {
        Base::ALL.into_iter().flat_map(|first| {
            Base::ALL.into_iter().flat_map(move |second| {
                Base::ALL
                    .into_iter()
                    .map(move |third| Codon([first, second, third]))
            })
        })
    }

    fn codon(s: &str) -> Codon {
        let bases: Vec<Base> = s.chars().map(|c| Base::from_char(c).unwrap()).collect();
        Codon([bases[0], bases[1], bases[2]])
    }

    #[test]
    fn test_indices_cover_table_exactly_once() {
        let mut seen = [false; 64];
        for c in all_codons() {
            assert!(!seen[c.index()]);
            seen[c.index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_exactly_three_stops() {
        let stops: Vec<String> = all_codons()
            .filter(|c| c.is_stop())
            .map(|c| c.to_string())
            .collect();

        assert_eq!(stops, vec!["UAA", "UAG", "UGA"]);
    }

    #[test]
    fn test_start_marker_translates_to_methionine() {
        assert!(Codon::START.is_start());
        assert_eq!(Codon::START.to_string(), "AUG");
        assert_eq!(Codon::START.product().residue(), Some(AminoAcid::Met));

        let starts = all_codons().filter(|c| c.is_start()).count();
        assert_eq!(starts, 1);
    }

    #[test]
    fn test_known_codons() {
        assert_eq!(codon("GCU").product().residue(), Some(AminoAcid::Ala));
        assert_eq!(codon("UGG").product().residue(), Some(AminoAcid::Trp));
        assert_eq!(codon("UUU").product().residue(), Some(AminoAcid::Phe));
        assert_eq!(codon("CGA").product().residue(), Some(AminoAcid::Arg));
        assert_eq!(codon("AAA").product().residue(), Some(AminoAcid::Lys));
        assert!(codon("UGA").product().is_stop());
    }

    #[test]
    fn test_one_letter_codes_unique() {
        use std::collections::HashSet;

        let letters: HashSet<char> = all_codons()
            .filter_map(|c| c.product().residue())
            .map(AminoAcid::one_letter)
            .collect();

        assert_eq!(letters.len(), 20);
    }

    #[test]
    fn test_serialization() {
        let product = codon("AUG").product();
        let json = serde_json::to_string(&product).unwrap();
        let back: CodonProduct = serde_json::from_str(&json).unwrap();
        assert_eq!(product, back);
    }
}
