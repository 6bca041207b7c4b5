use super::ast::*;
use super::*;

fn run(pattern: &str) -> Ast {
    Parser::parse(pattern)
}

fn lit(c: char) -> Ast {
    Ast::literal(c)
}

fn make2(kind: AstKind, children: Vec<Ast>) -> Ast {
    Ast { kind, children }
}

#[cfg(test)]
mod basic_match {
    use super::*;

    #[test]
    fn match_char() {
        assert_eq!(run("a"), lit('a'));
    }

    #[test]
    fn match_concat() {
        let src = "abc";
        let expect = make2(AstKind::Concat, vec![lit('a'), lit('b'), lit('c')]);

        assert_eq!(run(src), expect);
    }

    #[test]
    fn match_empty() {
        assert_eq!(run(""), Ast::concat(vec![]));
        assert_eq!(run("()"), Ast::concat(vec![]));
    }

    #[test]
    fn match_quantifier_char_as_literal() {
        // a quantifier with nothing to repeat is an ordinary character
        let src = "*a";
        let expect = Ast::concat(vec![lit('*'), lit('a')]);

        assert_eq!(run(src), expect);
    }
}

#[test]
fn group() {
    {
        let src = "a(bc)d";
        let expect = make2(
            AstKind::Concat,
            vec![
                lit('a'),
                make2(AstKind::Concat, vec![lit('b'), lit('c')]),
                lit('d'),
            ],
        );

        assert_eq!(run(src), expect);
    }
    {
        let src = "(a)";
        assert_eq!(run(src), lit('a'));
    }
}

#[cfg(test)]
mod union {
    use super::*;

    #[test]
    fn two_way() {
        let src = "(a|b)";
        let expect = Ast::union(lit('a'), lit('b'));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn nests_to_the_right() {
        let src = "abc|def|g";
        let expect = Ast::union(
            Ast::concat(vec![lit('a'), lit('b'), lit('c')]),
            Ast::union(Ast::concat(vec![lit('d'), lit('e'), lit('f')]), lit('g')),
        );

        assert_eq!(run(src), expect);
    }

    #[test]
    fn takes_whole_left_concat() {
        let src = "ab|c";
        let expect = Ast::union(Ast::concat(vec![lit('a'), lit('b')]), lit('c'));

        assert_eq!(run(src), expect);
    }

    #[test]
    fn empty_alternatives() {
        assert_eq!(run("a|"), Ast::union(lit('a'), Ast::concat(vec![])));
        assert_eq!(run("|a"), Ast::union(Ast::concat(vec![]), lit('a')));
    }

    #[test]
    fn inside_concat() {
        let src = "(a|b)(c|d)";
        let expect = Ast::concat(vec![
            Ast::union(lit('a'), lit('b')),
            Ast::union(lit('c'), lit('d')),
        ]);

        assert_eq!(run(src), expect);
    }
}

#[cfg(test)]
mod repeat {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a?", 0, RepeatKind::Num(1))]
    #[case("a*", 0, RepeatKind::Infinity)]
    #[case("a+", 1, RepeatKind::Infinity)]
    #[case("a{3}", 3, RepeatKind::Num(3))]
    #[case("a{2,}", 2, RepeatKind::Infinity)]
    #[case("a{2,3}", 2, RepeatKind::Num(3))]
    #[case("a{0,1}", 0, RepeatKind::Num(1))]
    #[case("a{12,34}", 12, RepeatKind::Num(34))]
    fn quantifiers(#[case] src: &str, #[case] min: u32, #[case] max: RepeatKind) {
        let expect = Ast::repeat(lit('a'), min, max);

        assert_eq!(run(src), expect);
        assert_eq!(run(src).min(), Some(min));
        assert_eq!(run(src).max(), Some(max));
    }

    #[test]
    fn group_operand() {
        let src = "(ab)+c";
        let expect = Ast::concat(vec![
            Ast::repeat(
                Ast::concat(vec![lit('a'), lit('b')]),
                1,
                RepeatKind::Infinity,
            ),
            lit('c'),
        ]);

        assert_eq!(run(src), expect);
    }

    #[test]
    fn binds_to_last_atom_only() {
        let src = "ab*";
        let expect = Ast::concat(vec![lit('a'), Ast::repeat(lit('b'), 0, RepeatKind::Infinity)]);

        assert_eq!(run(src), expect);
    }

    #[test]
    fn second_quantifier_is_literal() {
        let src = "a**";
        let expect = Ast::concat(vec![Ast::repeat(lit('a'), 0, RepeatKind::Infinity), lit('*')]);

        assert_eq!(run(src), expect);
    }
}

#[cfg(test)]
mod lenient {
    use super::*;

    #[test]
    fn unclosed_group() {
        assert_eq!(run("(ab"), Ast::concat(vec![lit('a'), lit('b')]));
        assert_eq!(run("(a|b"), Ast::union(lit('a'), lit('b')));
    }

    #[test]
    fn stray_close_stops_scan() {
        assert_eq!(run("a)bc"), lit('a'));
    }

    #[test]
    fn unclosed_repeat() {
        assert_eq!(run("a{2"), Ast::repeat(lit('a'), 2, RepeatKind::Num(2)));
        assert_eq!(run("a{2,"), Ast::repeat(lit('a'), 2, RepeatKind::Infinity));
    }

    #[test]
    fn missing_count_reads_zero() {
        let expect = Ast::concat(vec![Ast::repeat(lit('a'), 0, RepeatKind::Num(0)), lit('x'), lit('}')]);

        assert_eq!(run("a{x}"), expect);
    }

    #[test]
    fn count_overflow_saturates() {
        let expect = Ast::repeat(lit('a'), u32::MAX, RepeatKind::Num(u32::MAX));

        assert_eq!(run("a{99999999999}"), expect);
    }

    #[test]
    fn out_of_order_range_is_kept() {
        assert_eq!(run("a{3,1}"), Ast::repeat(lit('a'), 3, RepeatKind::Num(1)));
    }
}

#[cfg(test)]
mod strict {
    use super::*;

    #[test]
    fn accepts_well_formed() {
        let src = "P(Q|R|S)T(UV|W|X)*Z+";

        assert_eq!(Parser::parse_strict(src), Ok(run(src)));
    }

    #[test]
    fn unclosed_group() {
        assert_eq!(Parser::parse_strict("a(bc"), Err(ParseError::UnclosedGroup(1)));
    }

    #[test]
    fn unmatched_close() {
        assert_eq!(Parser::parse_strict("ab)c"), Err(ParseError::UnmatchedClose(2)));
    }

    #[test]
    fn unclosed_repeat() {
        assert_eq!(Parser::parse_strict("a{2,3"), Err(ParseError::UnclosedRepeat(1)));
    }

    #[test]
    fn missing_count() {
        assert_eq!(Parser::parse_strict("a{,3}"), Err(ParseError::MissingRepeatCount(2)));
    }

    #[test]
    fn overflow() {
        assert_eq!(
            Parser::parse_strict("a{99999999999}"),
            Err(ParseError::RepeatCountOverflow(2))
        );
    }

    #[test]
    fn out_of_order() {
        assert_eq!(
            Parser::parse_strict("ab{3,1}"),
            Err(ParseError::RepeatOutOfOrder { at: 2, min: 3, max: 1 })
        );
    }

    #[test]
    fn error_message() {
        let err = Parser::parse_strict("a{3,1}").unwrap_err();

        assert_eq!(err.to_string(), "out of repeat order {3,1} at 1");
    }
}

#[test]
fn reparse_is_identical() {
    for src in ["(a|b)(c|d)E+G?", "P(Q|R|S)T(UV|W|X)*Z+", "1(0|1)*2(3|4){5}36"] {
        assert_eq!(run(src), run(src));
    }
}

#[test]
fn display_round_trip() {
    for src in ["a?", "(a|b)", "a{2,3}", "ab+c{2,}", "(ab)*", "1(0|1)*2(3|4){5}36"] {
        let ast = run(src);

        assert_eq!(run(&ast.to_string()), ast);
    }
    assert_eq!(run("(a|b)(c|d)E+G?").to_string(), "(a|b)(c|d)E+G?");
}

#[test]
fn display_keeps_quantifier_chars_literal() {
    for src in ["a(+)", "a({)", "a(*)b", "a(?)", "(+)*", "a(bc)d", "a()b"] {
        let ast = run(src);

        assert_eq!(ast.to_string(), src);
        assert_eq!(run(&ast.to_string()), ast);
    }
    // leading position cannot be read as a quantifier
    assert_eq!(Ast::concat(vec![lit('+'), lit('a')]).to_string(), "+a");
}
