/**
 * Lexer Tests
 *
 * Test suite for tokenization of template expressions.
 */

#[cfg(test)]
mod tests {
    use binding_parser::expression_parser::lexer::{Lexer, Token, TokenType};

    fn lex(text: &str) -> Vec<Token> {
        Lexer::new().tokenize(text)
    }

    fn expect_token(token: &Token, index: usize, token_type: TokenType, str_value: &str) {
        assert_eq!(token.index, index, "index of {:?}", token);
        assert_eq!(token.token_type, token_type, "type of {:?}", token);
        assert_eq!(token.str_value, str_value, "value of {:?}", token);
    }

    mod token_stream_tests {
        use super::*;

        #[test]
        fn should_tokenize_a_simple_identifier() {
            let tokens = lex("j");
            assert_eq!(tokens.len(), 1);
            expect_token(&tokens[0], 0, TokenType::Identifier, "j");
        }

        #[test]
        fn should_tokenize_a_dotted_identifier() {
            let tokens = lex("j.k");
            assert_eq!(tokens.len(), 3);
            expect_token(&tokens[0], 0, TokenType::Identifier, "j");
            expect_token(&tokens[1], 1, TokenType::Character, ".");
            expect_token(&tokens[2], 2, TokenType::Identifier, "k");
        }

        #[test]
        fn should_tokenize_an_operator_stream() {
            let tokens = lex("j-k");
            assert_eq!(tokens.len(), 3);
            expect_token(&tokens[1], 1, TokenType::Operator, "-");
        }

        #[test]
        fn should_skip_whitespace() {
            let tokens = lex(" \t\r\n j \t ");
            assert_eq!(tokens.len(), 1);
            expect_token(&tokens[0], 5, TokenType::Identifier, "j");
        }

        #[test]
        fn should_produce_no_tokens_for_empty_input() {
            assert!(lex("").is_empty());
            assert!(lex("   ").is_empty());
        }

        #[test]
        fn should_tokenize_identifiers_with_dollar_and_underscore() {
            let tokens = lex("$implicit _private x2");
            expect_token(&tokens[0], 0, TokenType::Identifier, "$implicit");
            expect_token(&tokens[1], 10, TokenType::Identifier, "_private");
            expect_token(&tokens[2], 19, TokenType::Identifier, "x2");
        }

        #[test]
        fn should_record_end_offsets() {
            let tokens = lex("foo == bar");
            assert_eq!(tokens[0].end, 3);
            assert_eq!(tokens[1].end, 6);
            assert_eq!(tokens[2].end, 10);
        }
    }

    mod keyword_tests {
        use super::*;

        #[test]
        fn should_classify_reserved_words_as_keywords() {
            for keyword in ["var", "null", "undefined", "true", "false", "if", "else"] {
                let tokens = lex(keyword);
                assert_eq!(tokens.len(), 1);
                assert!(tokens[0].is_keyword(), "{} should be a keyword", keyword);
            }
        }

        #[test]
        fn should_expose_keyword_predicates() {
            assert!(lex("var")[0].is_keyword_var());
            assert!(lex("null")[0].is_keyword_null());
            assert!(lex("undefined")[0].is_keyword_undefined());
            assert!(lex("true")[0].is_keyword_true());
            assert!(lex("false")[0].is_keyword_false());
            assert!(lex("if")[0].is_keyword_if());
            assert!(lex("else")[0].is_keyword_else());
        }

        #[test]
        fn should_not_classify_prefixed_words_as_keywords() {
            assert!(lex("truer")[0].is_identifier());
            assert!(lex("ifx")[0].is_identifier());
        }
    }

    mod number_tests {
        use super::*;

        #[test]
        fn should_tokenize_integers() {
            let tokens = lex("88");
            assert!(tokens[0].is_number());
            assert_eq!(tokens[0].num_value, 88.0);
        }

        #[test]
        fn should_tokenize_fractions() {
            assert_eq!(lex("0.5")[0].num_value, 0.5);
            assert_eq!(lex(".5")[0].num_value, 0.5);
        }

        #[test]
        fn should_tokenize_exponents() {
            assert_eq!(lex("0.5E-10")[0].num_value, 0.5e-10);
            assert_eq!(lex("0.5E+10")[0].num_value, 0.5e10);
            assert_eq!(lex("2e14")[0].num_value, 2e14);
        }

        #[test]
        fn should_report_invalid_exponents() {
            let tokens = lex("0.5E-");
            assert!(tokens[0].is_error());
            assert_eq!(tokens[0].str_value, "Invalid exponent");

            let tokens = lex("0.5E-A");
            assert!(tokens[0].is_error());
        }

        #[test]
        fn should_use_sentinel_for_to_number_on_non_numbers() {
            assert_eq!(lex("a")[0].to_number(), -1.0);
            assert_eq!(lex("12")[0].to_number(), 12.0);
        }
    }

    mod string_tests {
        use super::*;

        #[test]
        fn should_tokenize_single_and_double_quoted_strings() {
            expect_token(&lex("'a'")[0], 0, TokenType::String, "a");
            expect_token(&lex("\"a\"")[0], 0, TokenType::String, "a");
        }

        #[test]
        fn should_allow_the_other_quote_inside() {
            assert_eq!(lex(r#"'a"b'"#)[0].str_value, "a\"b");
            assert_eq!(lex(r#""a'b""#)[0].str_value, "a'b");
        }

        #[test]
        fn should_decode_simple_escapes() {
            assert_eq!(lex(r"'a\nb'")[0].str_value, "a\nb");
            assert_eq!(lex(r"'a\tb'")[0].str_value, "a\tb");
            assert_eq!(lex(r"'a\\b'")[0].str_value, "a\\b");
            assert_eq!(lex(r#"'a\'b'"#)[0].str_value, "a'b");
            assert_eq!(lex(r"'a\xb'")[0].str_value, "axb");
        }

        #[test]
        fn should_decode_unicode_escapes() {
            assert_eq!(lex(r"'\u00a0'")[0].str_value, "\u{00A0}");
            assert_eq!(lex(r"'\u0041'")[0].str_value, "A");
        }

        #[test]
        fn should_report_invalid_unicode_escapes() {
            let tokens = lex(r"'\u00A'");
            assert!(tokens[0].is_error());
        }

        #[test]
        fn should_report_unterminated_strings() {
            let tokens = lex("'oops");
            assert!(tokens[0].is_error());
            assert_eq!(tokens[0].str_value, "Unterminated quote");
        }
    }

    mod operator_tests {
        use super::*;

        #[test]
        fn should_tokenize_single_character_operators() {
            for op in ["+", "-", "*", "/", "%", "^", "!", "=", "<", ">", "&", "|", "?", "#"] {
                let tokens = lex(op);
                assert_eq!(tokens.len(), 1, "lexing {}", op);
                assert!(tokens[0].is_operator(op), "lexing {}", op);
            }
        }

        #[test]
        fn should_tokenize_multi_character_operators() {
            for op in ["==", "===", "!=", "!==", "<=", ">=", "&&", "||", "?."] {
                let tokens = lex(op);
                assert_eq!(tokens.len(), 1, "lexing {}", op);
                assert!(tokens[0].is_operator(op), "lexing {}", op);
            }
        }

        #[test]
        fn should_split_adjacent_operators_greedily() {
            let tokens = lex("a===b");
            assert!(tokens[1].is_operator("==="));

            let tokens = lex("a==-b");
            assert!(tokens[1].is_operator("=="));
            assert!(tokens[2].is_operator("-"));
        }

        #[test]
        fn should_tokenize_punctuation_as_characters() {
            for ch in ['(', ')', '[', ']', '{', '}', ',', ':', ';'] {
                let tokens = lex(&ch.to_string());
                assert_eq!(tokens.len(), 1, "lexing {}", ch);
                assert!(tokens[0].is_character(ch), "lexing {}", ch);
            }
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn should_report_unexpected_characters_in_place() {
            let tokens = lex("a @ b");
            assert_eq!(tokens.len(), 3);
            assert!(tokens[0].is_identifier());
            assert!(tokens[1].is_error());
            assert_eq!(tokens[1].str_value, "Unexpected character [@]");
            assert_eq!(tokens[1].index, 2);
            assert!(tokens[2].is_identifier());
        }

        #[test]
        fn should_keep_scanning_after_an_error() {
            let tokens = lex("@@");
            assert_eq!(tokens.len(), 2);
            assert!(tokens.iter().all(|t| t.is_error()));
        }
    }
}
