//! Free-text query to match pattern.

use mediadex_core::SearchPattern;
use mediadex_error::PatternError;
use regex_syntax::ast::{
    Ast, AssertionKind, ClassSet, ClassSetItem, GroupKind, Literal, LiteralKind, RepetitionKind,
    RepetitionRange, Span,
};

/// A word edge: regex word boundary or one of the name separators.
const EDGE: &str = r"(?:\b|[.+\-_])";

/// Gap between words: one or more whitespace or separator characters.
const GAP: &str = r"[\s.+\-_]+";

/// Largest repetition bound PostgreSQL accepts.
const MAX_REPEAT: u32 = 255;

/// Compile a trimmed free-text query into a case-insensitive pattern.
///
/// A single word must sit between word edges, so `cat` finds `my_cat.mp4`
/// but not `concatenate.mp4`. Multiple words are joined by a separator gap,
/// so `the matrix` finds `The.Matrix.1999` but not `Thematrix`. The query
/// text itself is a regex fragment, limited to the syntax that both the
/// in-process engine and PostgreSQL read the same way.
///
/// # Errors
///
/// Returns [`PatternError`] if the resulting regex does not compile or uses
/// syntax PostgreSQL cannot run.
///
/// # Examples
///
/// ```
/// use mediadex_index::compile_query;
///
/// let pattern = compile_query("  the matrix ").unwrap();
/// assert!(pattern.is_match("The Matrix 1999"));
/// assert!(!pattern.is_match("Thematrix"));
/// assert_eq!(pattern.postgres_source(), r"the[\s.+\-_]+matrix");
///
/// assert!(compile_query("(unclosed").is_err());
/// assert!(compile_query(r"\p{Greek}").is_err());
/// ```
pub fn compile_query(query: &str) -> Result<SearchPattern, PatternError> {
    let query = query.trim();

    let source = if query.contains(char::is_whitespace) {
        query.split_whitespace().collect::<Vec<_>>().join(GAP)
    } else {
        format!("{EDGE}{query}{EDGE}")
    };

    let postgres = postgres_source(&source)?;
    SearchPattern::new(query, &source, postgres)
}

/// Render a Rust regex in PostgreSQL ARE syntax.
///
/// Word boundary assertions become `\y` and `\Y`; every other accepted
/// construct is written the same in both dialects and is copied as is.
fn postgres_source(source: &str) -> Result<String, PatternError> {
    let ast = regex_syntax::ast::parse::Parser::new()
        .parse(source)
        .map_err(|e| PatternError::new(e.to_string()))?;

    let mut edits = Vec::new();
    check(&ast, source, &mut edits)?;
    edits.sort_unstable_by_key(|(start, _, _)| *start);

    let mut rendered = String::with_capacity(source.len());
    let mut copied = 0;
    for (start, end, replacement) in edits {
        rendered.push_str(&source[copied..start]);
        rendered.push_str(replacement);
        copied = end;
    }
    rendered.push_str(&source[copied..]);

    Ok(rendered)
}

type Edit = (usize, usize, &'static str);

fn check(ast: &Ast, source: &str, edits: &mut Vec<Edit>) -> Result<(), PatternError> {
    match ast {
        Ast::Empty(_) | Ast::Dot(_) | Ast::ClassPerl(_) => Ok(()),
        Ast::Literal(literal) => check_literal(literal, source),
        Ast::Assertion(assertion) => {
            let replacement = match assertion.kind {
                AssertionKind::StartLine | AssertionKind::EndLine => return Ok(()),
                AssertionKind::WordBoundary => r"\y",
                AssertionKind::NotWordBoundary => r"\Y",
                _ => return Err(unsupported(source, &assertion.span)),
            };
            edits.push((
                assertion.span.start.offset,
                assertion.span.end.offset,
                replacement,
            ));
            Ok(())
        }
        Ast::ClassBracketed(class) => match &class.kind {
            ClassSet::Item(item) => check_class_item(item, source),
            ClassSet::BinaryOp(op) => Err(unsupported(source, &op.span)),
        },
        Ast::Repetition(repetition) => {
            if let RepetitionKind::Range(range) = &repetition.op.kind {
                let bound = match *range {
                    RepetitionRange::Exactly(n) | RepetitionRange::AtLeast(n) => n,
                    RepetitionRange::Bounded(_, n) => n,
                };
                if bound > MAX_REPEAT {
                    return Err(unsupported(source, &repetition.op.span));
                }
            }
            check(&repetition.ast, source, edits)
        }
        Ast::Group(group) => {
            match &group.kind {
                GroupKind::CaptureIndex(_) => {}
                GroupKind::NonCapturing(flags) if flags.items.is_empty() => {}
                _ => return Err(unsupported(source, &group.span)),
            }
            check(&group.ast, source, edits)
        }
        Ast::Alternation(alternation) => alternation
            .asts
            .iter()
            .try_for_each(|ast| check(ast, source, edits)),
        Ast::Concat(concat) => concat
            .asts
            .iter()
            .try_for_each(|ast| check(ast, source, edits)),
        Ast::Flags(_) | Ast::ClassUnicode(_) => Err(unsupported(source, ast.span())),
    }
}

fn check_literal(literal: &Literal, source: &str) -> Result<(), PatternError> {
    match literal.kind {
        LiteralKind::Verbatim
        | LiteralKind::Meta
        | LiteralKind::Superfluous
        | LiteralKind::Special(_) => Ok(()),
        LiteralKind::Octal | LiteralKind::HexFixed(_) | LiteralKind::HexBrace(_) => {
            Err(unsupported(source, &literal.span))
        }
    }
}

fn check_class_item(item: &ClassSetItem, source: &str) -> Result<(), PatternError> {
    match item {
        ClassSetItem::Empty(_) | ClassSetItem::Perl(_) => Ok(()),
        ClassSetItem::Literal(literal) => check_literal(literal, source),
        ClassSetItem::Range(range) => {
            check_literal(&range.start, source)?;
            check_literal(&range.end, source)
        }
        ClassSetItem::Ascii(ascii) if !ascii.negated => Ok(()),
        ClassSetItem::Union(union) => union
            .items
            .iter()
            .try_for_each(|item| check_class_item(item, source)),
        ClassSetItem::Ascii(_) | ClassSetItem::Unicode(_) | ClassSetItem::Bracketed(_) => {
            Err(unsupported(source, item.span()))
        }
    }
}

#[track_caller]
fn unsupported(source: &str, span: &Span) -> PatternError {
    let fragment = source
        .get(span.start.offset..span.end.offset)
        .unwrap_or(source);
    PatternError::new(format!(
        "{fragment:?} is not supported by every search backend"
    ))
}
