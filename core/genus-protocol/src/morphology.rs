use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// A label that is not part of the closed Universal Dependencies value set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} value '{label}'")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub label: String,
}

macro_rules! define_ud_enum {
    ($name:ident, $kind:expr, $doc:expr, { $($variant:ident => $label:literal),+ $(,)? }) => {
        #[doc = $doc]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The Universal Dependencies label for this value.
            pub const fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl FromStr for $name {
            type Err = UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($label => Ok($name::$variant),)+
                    _ => Err(UnknownLabel { kind: $kind, label: s.to_string() }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

define_ud_enum!(PartOfSpeech, "UPOS", "Universal part-of-speech tag.", {
    Adjective => "ADJ",
    Adposition => "ADP",
    Adverb => "ADV",
    Auxiliary => "AUX",
    CoordinatingConjunction => "CCONJ",
    Determiner => "DET",
    Interjection => "INTJ",
    Noun => "NOUN",
    Numeral => "NUM",
    Particle => "PART",
    Pronoun => "PRON",
    ProperNoun => "PROPN",
    Punctuation => "PUNCT",
    SubordinatingConjunction => "SCONJ",
    Symbol => "SYM",
    Verb => "VERB",
    Other => "X",
});

define_ud_enum!(Gender, "Gender", "Grammatical gender.", {
    Masculine => "Masc",
    Feminine => "Fem",
    Neuter => "Neut",
});

define_ud_enum!(Case, "Case", "Russian grammatical case.", {
    Nominative => "Nom",
    Genitive => "Gen",
    Dative => "Dat",
    Accusative => "Acc",
    Instrumental => "Ins",
    Locative => "Loc",
    Vocative => "Voc",
    Partitive => "Par",
});

define_ud_enum!(Number, "Number", "Grammatical number.", {
    Singular => "Sing",
    Plural => "Plur",
});

define_ud_enum!(Person, "Person", "Grammatical person.", {
    First => "1",
    Second => "2",
    Third => "3",
});

define_ud_enum!(Tense, "Tense", "Verb tense.", {
    Past => "Past",
    Present => "Pres",
    Future => "Fut",
});

define_ud_enum!(VerbForm, "VerbForm", "Finite, infinitive, participle or converb.", {
    Finite => "Fin",
    Infinitive => "Inf",
    Participle => "Part",
    Converb => "Conv",
});

define_ud_enum!(Variant, "Variant", "Form variant; Russian uses it for short adjectives.", {
    Short => "Short",
});

/// Typed morphological features of one token.
///
/// Only the features the gender engine reads are kept. Absent = not
/// applicable or unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Features {
    pub gender: Option<Gender>,
    pub case: Option<Case>,
    pub number: Option<Number>,
    pub person: Option<Person>,
    pub tense: Option<Tense>,
    pub verb_form: Option<VerbForm>,
    pub variant: Option<Variant>,
}

impl Features {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_case(mut self, case: Case) -> Self {
        self.case = Some(case);
        self
    }

    pub fn with_number(mut self, number: Number) -> Self {
        self.number = Some(number);
        self
    }

    pub fn with_person(mut self, person: Person) -> Self {
        self.person = Some(person);
        self
    }

    pub fn with_tense(mut self, tense: Tense) -> Self {
        self.tense = Some(tense);
        self
    }

    pub fn with_verb_form(mut self, verb_form: VerbForm) -> Self {
        self.verb_form = Some(verb_form);
        self
    }

    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    /// Sets one feature from its UD name/value pair.
    ///
    /// Names outside the tracked set are ignored and reported as `Ok(false)`.
    pub fn set(&mut self, name: &str, value: &str) -> Result<bool, UnknownLabel> {
        match name {
            "Gender" => self.gender = Some(value.parse()?),
            "Case" => self.case = Some(value.parse()?),
            "Number" => self.number = Some(value.parse()?),
            "Person" => self.person = Some(value.parse()?),
            "Tense" => self.tense = Some(value.parse()?),
            "VerbForm" => self.verb_form = Some(value.parse()?),
            "Variant" => self.variant = Some(value.parse()?),
            _ => return Ok(false),
        }
        Ok(true)
    }

    pub fn is_participle(&self) -> bool {
        self.verb_form == Some(VerbForm::Participle)
    }

    pub fn is_short(&self) -> bool {
        self.variant == Some(Variant::Short)
    }

    pub fn is_past(&self) -> bool {
        self.tense == Some(Tense::Past)
    }
}

impl fmt::Display for Features {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = [
            ("Case", self.case.map(Case::label)),
            ("Gender", self.gender.map(Gender::label)),
            ("Number", self.number.map(Number::label)),
            ("Person", self.person.map(Person::label)),
            ("Tense", self.tense.map(Tense::label)),
            ("Variant", self.variant.map(Variant::label)),
            ("VerbForm", self.verb_form.map(VerbForm::label)),
        ];

        let mut first = true;
        for (name, value) in pairs {
            if let Some(value) = value {
                if !first {
                    f.write_str("|")?;
                }
                write!(f, "{}={}", name, value)?;
                first = false;
            }
        }
        if first {
            f.write_str("_")?;
        }
        Ok(())
    }
}
