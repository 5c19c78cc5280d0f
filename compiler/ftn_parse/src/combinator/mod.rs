//! Backtracking parser combinators.
//!
//! A parser is anything implementing [`Parser`]: one `parse` call that
//! either yields a value or reports absence (`None`). Absence is the only
//! failure signal. Diagnostics go to the scan state's message sink and never
//! decide success on their own.
//!
//! | Combinator | Notation | Result |
//! |------------|----------|--------|
//! | [`ParserExt::then`] | `a >> b` | `b`'s value |
//! | [`ParserExt::skip`] | `a / b` | `a`'s value |
//! | [`ParserExt::pair`] | `a b` | both values |
//! | [`ParserExt::or`] | `a \| b` | first success |
//! | [`ParserExt::map`] | | mapped value |
//! | [`attempt`] | | `a`, rolled back on absence |
//! | [`maybe`] | `[a]` | `Option` of `a` |
//! | [`many`] / [`some`] | `a...` | `Vec` |
//! | [`skip_many`] | | [`Success`] |
//! | [`lookahead`] / [`not`] | `&a` / `!a` | [`Success`], consumes nothing |
//! | [`construct`] | | a fixed value |
//!
//! # Consumption on failure
//!
//! A sequence that fails part-way leaves the cursor where the failing
//! parser stopped; it does not roll back. Anything that must retry from the
//! same place goes through [`attempt`]. [`ParserExt::or`] does this for its
//! left branch, so alternation never leaks partial consumption into the next
//! alternative.
//!
//! When both branches of [`ParserExt::or`] fail, the messages of the branch
//! that stopped further along survive; on a tie both sets do, left first.
//! A literal that committed to its opening character and then went wrong
//! thus keeps its diagnostic even when a later alternative also fails.

use std::marker::PhantomData;

use ftn_diagnostic::MessageKind;

use crate::ScanState;

/// Zero-payload success marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Success;

/// A parser producing values of type `Output`.
pub trait Parser {
    type Output;

    /// Run the parser at the current position.
    ///
    /// `None` means "did not match here". The state may have advanced; use
    /// [`attempt`] when that matters.
    fn parse(&self, state: &mut ScanState<'_>) -> Option<Self::Output>;
}

/// Plain functions and closures are parsers.
impl<T, F> Parser for F
where
    F: Fn(&mut ScanState<'_>) -> Option<T>,
{
    type Output = T;

    #[inline]
    fn parse(&self, state: &mut ScanState<'_>) -> Option<T> {
        self(state)
    }
}

/// Sequencing and mapping adaptors available on every parser.
pub trait ParserExt: Parser + Sized {
    /// Run `self`, then `next`; keep `next`'s value.
    fn then<B: Parser>(self, next: B) -> Sequence<Self, B> {
        Sequence::new(self, next)
    }

    /// Run `self`, then `next`; keep `self`'s value.
    fn skip<B: Parser>(self, next: B) -> InvertedSequence<Self, B> {
        InvertedSequence::new(self, next)
    }

    /// Run `self`, then `next`; keep both values.
    fn pair<B: Parser>(self, next: B) -> Pair<Self, B> {
        Pair::new(self, next)
    }

    /// Try `self`; if absent, roll back and try `other`.
    fn or<B: Parser<Output = Self::Output>>(self, other: B) -> Alternative<Self, B> {
        Alternative::new(self, other)
    }

    /// Transform the value on success.
    fn map<U, F: Fn(Self::Output) -> U>(self, f: F) -> Map<Self, F> {
        Map::new(self, f)
    }
}

impl<P: Parser> ParserExt for P {}

// === Sequencing ===

/// `a >> b`: both must succeed; yields `b`'s value.
#[derive(Clone, Copy, Debug)]
pub struct Sequence<A, B> {
    first: A,
    second: B,
}

impl<A, B> Sequence<A, B> {
    pub const fn new(first: A, second: B) -> Self {
        Sequence { first, second }
    }
}

impl<A: Parser, B: Parser> Parser for Sequence<A, B> {
    type Output = B::Output;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<B::Output> {
        self.first.parse(state)?;
        self.second.parse(state)
    }
}

/// `a / b`: both must succeed; yields `a`'s value.
#[derive(Clone, Copy, Debug)]
pub struct InvertedSequence<A, B> {
    first: A,
    second: B,
}

impl<A, B> InvertedSequence<A, B> {
    pub const fn new(first: A, second: B) -> Self {
        InvertedSequence { first, second }
    }
}

impl<A: Parser, B: Parser> Parser for InvertedSequence<A, B> {
    type Output = A::Output;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<A::Output> {
        let value = self.first.parse(state)?;
        self.second.parse(state)?;
        Some(value)
    }
}

/// Both must succeed; yields both values.
#[derive(Clone, Copy, Debug)]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pair<A, B> {
    pub const fn new(first: A, second: B) -> Self {
        Pair { first, second }
    }
}

impl<A: Parser, B: Parser> Parser for Pair<A, B> {
    type Output = (A::Output, B::Output);

    fn parse(&self, state: &mut ScanState<'_>) -> Option<Self::Output> {
        let a = self.first.parse(state)?;
        let b = self.second.parse(state)?;
        Some((a, b))
    }
}

// === Alternation and backtracking ===

/// `a || b`: ordered choice.
///
/// The left branch runs under an implicit [`attempt`]; the right branch
/// starts from exactly where the left one did. If both fail, the cursor
/// stays where the right branch stopped and the messages are those of the
/// branch that got further.
#[derive(Clone, Copy, Debug)]
pub struct Alternative<A, B> {
    first: A,
    second: B,
}

impl<A, B> Alternative<A, B> {
    pub const fn new(first: A, second: B) -> Self {
        Alternative { first, second }
    }
}

impl<A: Parser, B: Parser<Output = A::Output>> Parser for Alternative<A, B> {
    type Output = A::Output;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<A::Output> {
        let mark = state.mark();
        if let Some(value) = self.first.parse(state) {
            return Some(value);
        }
        let first_end = state.location();
        let first_messages = state.take_messages_since(mark);
        state.rollback(mark);

        let result = self.second.parse(state);
        if result.is_none() {
            let second_end = state.location();
            if first_end > second_end {
                state.take_messages_since(mark);
                state.restore_messages(first_messages);
            } else if first_end == second_end {
                let second_messages = state.take_messages_since(mark);
                state.restore_messages(first_messages);
                state.restore_messages(second_messages);
            }
        }
        result
    }
}

/// Run `parser` under a mark; on absence roll back to the mark.
///
/// The by-reference form of [`Attempt`], for combinators that own their
/// inner parser.
pub fn attempt_with<P: Parser>(parser: &P, state: &mut ScanState<'_>) -> Option<P::Output> {
    let mark = state.mark();
    let result = parser.parse(state);
    if result.is_none() {
        state.rollback(mark);
    }
    result
}

/// Run a parser; on absence restore the position and drop its messages.
#[derive(Clone, Copy, Debug)]
pub struct Attempt<P> {
    parser: P,
}

impl<P> Attempt<P> {
    pub const fn new(parser: P) -> Self {
        Attempt { parser }
    }
}

impl<P: Parser> Parser for Attempt<P> {
    type Output = P::Output;

    #[inline]
    fn parse(&self, state: &mut ScanState<'_>) -> Option<P::Output> {
        attempt_with(&self.parser, state)
    }
}

/// Optional element: always succeeds.
#[derive(Clone, Copy, Debug)]
pub struct Maybe<P> {
    parser: P,
}

impl<P> Maybe<P> {
    pub const fn new(parser: P) -> Self {
        Maybe { parser }
    }
}

impl<P: Parser> Parser for Maybe<P> {
    type Output = Option<P::Output>;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<Self::Output> {
        Some(attempt_with(&self.parser, state))
    }
}

// === Repetition ===
//
// Each iteration is an attempt, so the failing iteration consumes nothing.
// An iteration that succeeds without advancing ends the loop.

/// Repeat `parser` until it fails or stops advancing, feeding each value to `sink`.
fn repeat<P: Parser>(parser: &P, state: &mut ScanState<'_>, mut sink: impl FnMut(P::Output)) {
    let mut at = state.location();
    while let Some(item) = attempt_with(parser, state) {
        sink(item);
        if state.location() <= at {
            break;
        }
        at = state.location();
    }
}

/// Zero or more, collected.
#[derive(Clone, Copy, Debug)]
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub const fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<P: Parser> Parser for Many<P> {
    type Output = Vec<P::Output>;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<Self::Output> {
        let mut items = Vec::new();
        repeat(&self.parser, state, |item| items.push(item));
        Some(items)
    }
}

/// One or more, collected.
///
/// The first occurrence is required and is not an attempt: its failure
/// propagates exactly like any other mandatory element.
#[derive(Clone, Copy, Debug)]
pub struct NonemptyMany<P> {
    parser: P,
}

impl<P> NonemptyMany<P> {
    pub const fn new(parser: P) -> Self {
        NonemptyMany { parser }
    }
}

impl<P: Parser> Parser for NonemptyMany<P> {
    type Output = Vec<P::Output>;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<Self::Output> {
        let start = state.location();
        let mut items = vec![self.parser.parse(state)?];
        if state.location() > start {
            repeat(&self.parser, state, |item| items.push(item));
        }
        Some(items)
    }
}

/// Zero or more, values discarded. Always succeeds.
#[derive(Clone, Copy, Debug)]
pub struct SkipMany<P> {
    parser: P,
}

impl<P> SkipMany<P> {
    pub const fn new(parser: P) -> Self {
        SkipMany { parser }
    }
}

impl<P: Parser> Parser for SkipMany<P> {
    type Output = Success;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<Success> {
        repeat(&self.parser, state, drop);
        Some(Success)
    }
}

/// `p` separated by `separator`, at least one `p`.
///
/// A trailing separator not followed by `p` is left unconsumed.
#[derive(Clone, Copy, Debug)]
pub struct NonemptySeparated<P, S> {
    item: P,
    separator: S,
}

impl<P, S> NonemptySeparated<P, S> {
    pub const fn new(item: P, separator: S) -> Self {
        NonemptySeparated { item, separator }
    }
}

impl<P: Parser, S: Parser> Parser for NonemptySeparated<P, S> {
    type Output = Vec<P::Output>;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<Self::Output> {
        let mut items = vec![self.item.parse(state)?];
        loop {
            let mark = state.mark();
            let next = self
                .separator
                .parse(state)
                .and_then(|_| self.item.parse(state));
            match next {
                Some(item) if state.location() > mark.location() => items.push(item),
                Some(item) => {
                    items.push(item);
                    break;
                }
                None => {
                    state.rollback(mark);
                    break;
                }
            }
        }
        Some(items)
    }
}

// === Lookahead ===

/// Succeeds iff `p` would succeed here. Never consumes.
#[derive(Clone, Copy, Debug)]
pub struct Lookahead<P> {
    parser: P,
}

impl<P> Lookahead<P> {
    pub const fn new(parser: P) -> Self {
        Lookahead { parser }
    }
}

impl<P: Parser> Parser for Lookahead<P> {
    type Output = Success;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<Success> {
        let mark = state.mark();
        let result = self.parser.parse(state);
        state.rollback(mark);
        result.map(|_| Success)
    }
}

/// `!p`: succeeds iff `p` would fail here. Never consumes.
#[derive(Clone, Copy, Debug)]
pub struct Negated<P> {
    parser: P,
}

impl<P> Negated<P> {
    pub const fn new(parser: P) -> Self {
        Negated { parser }
    }
}

impl<P: Parser> Parser for Negated<P> {
    type Output = Success;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<Success> {
        let mark = state.mark();
        let result = self.parser.parse(state);
        state.rollback(mark);
        result.is_none().then_some(Success)
    }
}

// === Values ===

/// Apply a function to a parser's value.
#[derive(Clone, Copy, Debug)]
pub struct Map<P, F> {
    parser: P,
    f: F,
}

impl<P, F> Map<P, F> {
    pub const fn new(parser: P, f: F) -> Self {
        Map { parser, f }
    }
}

impl<P: Parser, U, F: Fn(P::Output) -> U> Parser for Map<P, F> {
    type Output = U;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<U> {
        self.parser.parse(state).map(&self.f)
    }
}

/// Always succeeds with a fixed value, consuming nothing.
#[derive(Clone, Copy, Debug)]
pub struct Construct<T> {
    value: T,
}

impl<T: Clone> Parser for Construct<T> {
    type Output = T;

    #[inline]
    fn parse(&self, _state: &mut ScanState<'_>) -> Option<T> {
        Some(self.value.clone())
    }
}

/// Always succeeds with `T::default()`, consuming nothing.
pub struct ConstructDefault<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> Clone for ConstructDefault<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ConstructDefault<T> {}

impl<T> std::fmt::Debug for ConstructDefault<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ConstructDefault")
    }
}

impl<T: Default> Parser for ConstructDefault<T> {
    type Output = T;

    #[inline]
    fn parse(&self, _state: &mut ScanState<'_>) -> Option<T> {
        Some(T::default())
    }
}

// === Raw input ===

/// Any single character; reports `end of file` at end of input.
#[derive(Clone, Copy, Debug, Default)]
pub struct AnyChar;

impl Parser for AnyChar {
    type Output = char;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<char> {
        let at = state.location();
        let ch = state.next_char();
        if ch.is_none() {
            state.say(at, MessageKind::EndOfFile);
        }
        ch
    }
}

/// Succeeds only at end of input.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsumedAllInput;

impl Parser for ConsumedAllInput {
    type Output = Success;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<Success> {
        state.is_at_end().then_some(Success)
    }
}

/// Skip through the next occurrence of an ASCII character.
#[derive(Clone, Copy, Debug)]
pub struct SkipPast {
    goal: u8,
}

impl Parser for SkipPast {
    type Output = Success;

    fn parse(&self, state: &mut ScanState<'_>) -> Option<Success> {
        state.skip_past(self.goal).then_some(Success)
    }
}

// === Constructors ===

/// Roll back on absence. See [`Attempt`].
pub const fn attempt<P: Parser>(parser: P) -> Attempt<P> {
    Attempt::new(parser)
}

/// Optional element. See [`Maybe`].
pub const fn maybe<P: Parser>(parser: P) -> Maybe<P> {
    Maybe::new(parser)
}

/// Zero or more. See [`Many`].
pub const fn many<P: Parser>(parser: P) -> Many<P> {
    Many::new(parser)
}

/// One or more. See [`NonemptyMany`].
pub const fn some<P: Parser>(parser: P) -> NonemptyMany<P> {
    NonemptyMany::new(parser)
}

/// Zero or more, discarding values. See [`SkipMany`].
pub const fn skip_many<P: Parser>(parser: P) -> SkipMany<P> {
    SkipMany::new(parser)
}

/// Non-consuming positive lookahead. See [`Lookahead`].
pub const fn lookahead<P: Parser>(parser: P) -> Lookahead<P> {
    Lookahead::new(parser)
}

/// Non-consuming negative lookahead. See [`Negated`].
pub const fn not<P: Parser>(parser: P) -> Negated<P> {
    Negated::new(parser)
}

/// A fixed value. See [`Construct`].
pub const fn construct<T: Clone>(value: T) -> Construct<T> {
    Construct { value }
}

/// A default-constructed value. See [`ConstructDefault`].
pub const fn construct_default<T: Default>() -> ConstructDefault<T> {
    ConstructDefault {
        marker: PhantomData,
    }
}

/// Unit success, consuming nothing.
pub const fn ok() -> Construct<Success> {
    construct(Success)
}

/// Any one character. See [`AnyChar`].
pub const fn any_char() -> AnyChar {
    AnyChar
}

/// End of input. See [`ConsumedAllInput`].
pub const fn consumed_all_input() -> ConsumedAllInput {
    ConsumedAllInput
}

/// Skip through `goal`. See [`SkipPast`].
pub const fn skip_past(goal: u8) -> SkipPast {
    SkipPast { goal }
}
