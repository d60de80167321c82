use std::fmt;

use rand::Rng;

use crate::generators::{generate_ident, generate_number, generate_string};

/// One line of pseudo-code. Every variant carries the values it was rendered
/// from, so a line can be inspected before it is written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
    /// `a = b + "text" * (1 / 2)`
    Arithmetic {
        target: String,
        operand: String,
        text: String,
        dividend: u32,
        divisor: u32,
    },
    /// `a = 12`
    Assign { target: String, value: u32 },
    /// `// text`
    Comment { text: String },
    /// `a = "text" * 3`
    Repeat {
        target: String,
        text: String,
        count: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Arithmetic,
    Assign,
    Comment,
    Repeat,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::Arithmetic,
        TemplateKind::Assign,
        TemplateKind::Comment,
        TemplateKind::Repeat,
    ];

    pub fn index(self) -> usize {
        match self {
            TemplateKind::Arithmetic => 0,
            TemplateKind::Assign => 1,
            TemplateKind::Comment => 2,
            TemplateKind::Repeat => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TemplateKind::Arithmetic => "arithmetic",
            TemplateKind::Assign => "assign",
            TemplateKind::Comment => "comment",
            TemplateKind::Repeat => "repeat",
        }
    }
}

impl Template {
    /// Picks one of the four templates with equal probability and fills it.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let kind = TemplateKind::ALL[rng.random_range(0..TemplateKind::ALL.len())];
        Self::generate(kind, rng)
    }

    /// Fields are drawn in the order they appear in the rendered line.
    pub fn generate<R: Rng + ?Sized>(kind: TemplateKind, rng: &mut R) -> Self {
        match kind {
            TemplateKind::Arithmetic => {
                let target = generate_ident(rng, 1, 5);
                let operand = generate_ident(rng, 1, 5);
                let text = generate_string(rng, 1, 50);
                let dividend = generate_number(rng);
                let divisor = generate_number(rng);
                Template::Arithmetic {
                    target,
                    operand,
                    text,
                    dividend,
                    divisor,
                }
            }
            TemplateKind::Assign => {
                let target = generate_ident(rng, 1, 10);
                let value = generate_number(rng);
                Template::Assign { target, value }
            }
            TemplateKind::Comment => Template::Comment {
                text: generate_string(rng, 20, 70),
            },
            TemplateKind::Repeat => {
                let target = generate_ident(rng, 1, 10);
                let text = generate_string(rng, 5, 40);
                let count = generate_number(rng);
                Template::Repeat {
                    target,
                    text,
                    count,
                }
            }
        }
    }

    pub fn kind(&self) -> TemplateKind {
        match self {
            Template::Arithmetic { .. } => TemplateKind::Arithmetic,
            Template::Assign { .. } => TemplateKind::Assign,
            Template::Comment { .. } => TemplateKind::Comment,
            Template::Repeat { .. } => TemplateKind::Repeat,
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Template::Arithmetic {
                target,
                operand,
                text,
                dividend,
                divisor,
            } => write!(f, "{target} = {operand} + \"{text}\" * ({dividend} / {divisor})"),
            Template::Assign { target, value } => write!(f, "{target} = {value}"),
            Template::Comment { text } => write!(f, "// {text}"),
            Template::Repeat {
                target,
                text,
                count,
            } => write!(f, "{target} = \"{text}\" * {count}"),
        }
    }
}
