//! Castilian letter-to-phoneme rules.
//!
//! Every normalized letter maps to exactly one [`Rule`]. Fixed rules ignore
//! context; contextual rules are pure functions of the surrounding symbols and the
//! letter's position in its syllable. The table is a `match`, so it is built at
//! compile time and shared by every caller.
//!
//! # Rule Sets
//!
//! - Vowels: accents dropped, `i`/`u` become glides before another vowel
//! - Stops `b v d g`: stop after a pause or nasal, approximant elsewhere
//! - Fricatives `f s z`: `f` voiced before any voiced symbol, `s z` before a voiced consonant
//! - Nasal `n`: assimilates to the place of the following consonant
//! - Rhotics `r R`: trill after a pause or `l n s`, tap elsewhere
//! - Palatals `y ʎ`: yeísmo, both realized as `ʝ` or `ʑ`

use super::context::{LetterContext, CASTILIAN};
use super::digraphs::{AFFRICATE, HARD_G, PALATAL_LATERAL, TRILL};

/// A contextual rule body.
pub type RuleFn = fn(&LetterContext) -> &'static str;

/// How one letter is transcribed.
#[derive(Clone, Copy)]
pub enum Rule {
    /// Always the same output
    Fixed(&'static str),
    /// Output depends on the neighbors
    Contextual(RuleFn),
}

impl Rule {
    /// Apply the rule in the given context.
    #[inline]
    pub fn apply(&self, ctx: &LetterContext) -> &'static str {
        match self {
            Rule::Fixed(symbol) => *symbol,
            Rule::Contextual(rule) => rule(ctx),
        }
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rule::Fixed(symbol) => write!(f, "Fixed({:?})", symbol),
            Rule::Contextual(_) => write!(f, "Contextual"),
        }
    }
}

/// The rule registered for a normalized letter, or `None` if it has no rule.
pub fn rule_for(letter: char) -> Option<Rule> {
    let rule = match letter {
        'a' | 'á' => Rule::Fixed("a"),
        'e' | 'é' => Rule::Fixed("e"),
        'o' | 'ó' => Rule::Fixed("o"),
        'í' => Rule::Fixed("i"),
        'ú' => Rule::Fixed("u"),
        'i' => Rule::Contextual(high_front_vowel),
        'u' | 'ü' => Rule::Contextual(high_back_vowel),

        'b' | 'v' => Rule::Contextual(bilabial_stop),
        'd' => Rule::Contextual(dental_stop),
        'g' => Rule::Contextual(velar_g),
        HARD_G => Rule::Contextual(velar_stop),
        'c' => Rule::Contextual(letter_c),
        'k' | 'q' => Rule::Fixed("k"),
        'p' => Rule::Fixed("p"),
        't' => Rule::Fixed("t"),

        'f' => Rule::Contextual(labiodental_f),
        's' => Rule::Contextual(sibilant_s),
        'z' => Rule::Contextual(sibilant_z),
        'j' => Rule::Fixed("x"),
        'h' => Rule::Fixed(""),
        'x' => Rule::Contextual(letter_x),
        AFFRICATE => Rule::Fixed("ʧ"),

        'm' => Rule::Fixed("m"),
        'n' => Rule::Contextual(nasal_n),
        'ñ' => Rule::Fixed("ɲ"),

        'l' => Rule::Fixed("l"),
        'r' => Rule::Contextual(rhotic_r),
        TRILL => Rule::Fixed("r"),

        'y' => Rule::Contextual(palatal_y),
        PALATAL_LATERAL => Rule::Contextual(palatal_lateral),
        'w' => Rule::Fixed("w"),

        _ => return None,
    };
    Some(rule)
}

// ============================================================================
// Vowels
// ============================================================================

/// `i` → glide `j` before a different vowel
fn high_front_vowel(ctx: &LetterContext) -> &'static str {
    if ctx.next.is_in(CASTILIAN.vowels) && !ctx.next.is_in(&['i', 'í']) {
        "j"
    } else {
        "i"
    }
}

/// `u`, `ü` → glide `w` before a different vowel
fn high_back_vowel(ctx: &LetterContext) -> &'static str {
    if ctx.next.is_in(CASTILIAN.vowels) && !ctx.next.is_in(&['u', 'ú', 'ü']) {
        "w"
    } else {
        "u"
    }
}

// ============================================================================
// Stops
// ============================================================================

/// `b`, `v` → `b` after a pause or nasal, else `β`
fn bilabial_stop(ctx: &LetterContext) -> &'static str {
    if ctx.previous.is_pause_or_in(CASTILIAN.nasals) {
        "b"
    } else {
        "β"
    }
}

/// `d` → `d` after a pause, nasal or lateral, else `ð`
fn dental_stop(ctx: &LetterContext) -> &'static str {
    if ctx.previous.is_pause_or_in(CASTILIAN.nasals) || ctx.previous.is_in(CASTILIAN.laterals)
    {
        "d"
    } else {
        "ð"
    }
}

/// `g` → `x` before `e`/`i`, else a velar stop or approximant
fn velar_g(ctx: &LetterContext) -> &'static str {
    if ctx.next.is_in(&['e', 'i', 'é', 'í']) {
        "x"
    } else {
        velar_stop(ctx)
    }
}

/// Hard g → `ɡ` after a pause or nasal, else `ɣ`
fn velar_stop(ctx: &LetterContext) -> &'static str {
    if ctx.previous.is_pause_or_in(CASTILIAN.nasals) {
        "ɡ"
    } else {
        "ɣ"
    }
}

/// `c` → `s` before `i`/`o`, else `k`
fn letter_c(ctx: &LetterContext) -> &'static str {
    if ctx.next.is_in(&['i', 'o', 'í', 'ó']) {
        "s"
    } else {
        "k"
    }
}

// ============================================================================
// Fricatives
// ============================================================================

/// `f` → `v` before a voiced symbol, vowels included
fn labiodental_f(ctx: &LetterContext) -> &'static str {
    if ctx.next.is_in(CASTILIAN.voiced) {
        "v"
    } else {
        "f"
    }
}

/// `s` → `z` before a voiced consonant
fn sibilant_s(ctx: &LetterContext) -> &'static str {
    if ctx.next.is_in(CASTILIAN.voiced_consonants) {
        "z"
    } else {
        "s"
    }
}

/// `z` → `z` before a voiced consonant, else `θ`
fn sibilant_z(ctx: &LetterContext) -> &'static str {
    if ctx.next.is_in(CASTILIAN.voiced_consonants) {
        "z"
    } else {
        "θ"
    }
}

/// `x` → `x` at the start of a word, else `ks`
fn letter_x(ctx: &LetterContext) -> &'static str {
    if ctx.index == 0 && ctx.previous.is_pause() {
        "x"
    } else {
        "ks"
    }
}

// ============================================================================
// Sonorants
// ============================================================================

/// `n` assimilates to the place of articulation of what follows
fn nasal_n(ctx: &LetterContext) -> &'static str {
    let next = ctx.next;
    if next.is_pause_or_in(CASTILIAN.vowels) {
        "n"
    } else if next.is_in(CASTILIAN.labiodentals) {
        "ɱ"
    } else if next.is_in(CASTILIAN.coronals) {
        "n"
    } else if next.is_in(CASTILIAN.palatals) {
        "ɲ"
    } else if next.is_in(CASTILIAN.bilabials) {
        "m"
    } else if next.is_in(CASTILIAN.velars) {
        "ŋ"
    } else {
        "ɴ"
    }
}

/// `r` → trill after a pause or `l`, `n`, `s`, else tap
fn rhotic_r(ctx: &LetterContext) -> &'static str {
    if ctx.previous.is_pause_or_in(&['l', 'n', 's']) {
        "r"
    } else {
        "ɾ"
    }
}

/// `y` → `i` at the end of a word or after `o`, else a palatal fricative
fn palatal_y(ctx: &LetterContext) -> &'static str {
    if ctx.next.is_pause() || ctx.previous.is_in(&['o']) {
        "i"
    } else {
        palatal_lateral(ctx)
    }
}

/// `ll` → `ʑ` after a pause, nasal or lateral, else `ʝ`
fn palatal_lateral(ctx: &LetterContext) -> &'static str {
    if ctx.previous.is_pause_or_in(CASTILIAN.nasals) || ctx.previous.is_in(CASTILIAN.laterals)
    {
        "ʑ"
    } else {
        "ʝ"
    }
}
