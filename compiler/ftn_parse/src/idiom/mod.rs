//! Recurring grammar shapes built from tokens and combinators.

use crate::combinator::{
    construct_default, not, Alternative, ConstructDefault, InvertedSequence, Negated,
    NonemptySeparated, Parser, ParserExt, Sequence,
};
use crate::token::{tok, TokenStringMatch};

/// `( p )`.
pub type Parenthesized<P> = Sequence<TokenStringMatch, InvertedSequence<P, TokenStringMatch>>;

/// `[ p ]`.
pub type Bracketed<P> = Parenthesized<P>;

/// `p` between parentheses.
pub fn parenthesized<P: Parser>(parser: P) -> Parenthesized<P> {
    tok("(").then(parser.skip(tok(")")))
}

/// `p` between square brackets.
pub fn bracketed<P: Parser>(parser: P) -> Bracketed<P> {
    tok("[").then(parser.skip(tok("]")))
}

/// `p [, p]...`: one or more, comma-separated.
pub const fn nonempty_list<P: Parser>(parser: P) -> NonemptySeparated<P, TokenStringMatch> {
    NonemptySeparated::new(parser, tok(","))
}

type DefaultAfter<T> = Sequence<TokenStringMatch, ConstructDefault<T>>;
type DefaultUnlessComma<T> = Sequence<Negated<TokenStringMatch>, ConstructDefault<T>>;

/// `[[, p] ::]`, as in `integer, parameter :: n` or `integer n`.
pub type OptionalBeforeColons<P> = Alternative<
    Alternative<
        InvertedSequence<Sequence<TokenStringMatch, P>, TokenStringMatch>,
        DefaultAfter<<P as Parser>::Output>,
    >,
    DefaultUnlessComma<<P as Parser>::Output>,
>;

/// An optional item that, when present, follows a comma and precedes `::`.
///
/// Without the item the comma must not appear and the `::` is optional;
/// the result is then `Default::default()`. The alternatives are tried in
/// that order, comma form first.
pub fn optional_before_colons<P>(parser: P) -> OptionalBeforeColons<P>
where
    P: Parser,
    P::Output: Default,
{
    tok(",")
        .then(parser)
        .skip(tok("::"))
        .or(tok("::").then(construct_default()))
        .or(not(tok(",")).then(construct_default()))
}

#[cfg(test)]
mod tests;
