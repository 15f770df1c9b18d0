#[cfg(test)]
mod scanner_tests {
    use num_bigint::BigInt;
    use smart_calculator as calc;

    use calc::error::CalculatorError;
    use calc::scanner::*;
    use calc::token::*;

    fn lookup(name: &str) -> Option<BigInt> {
        match name {
            "a" => Some(BigInt::from(3)),
            "count" => Some(BigInt::from(-10)),
            _ => None,
        }
    }

    fn scan(source: &str) -> Result<Vec<Token>, CalculatorError> {
        Scanner::new(source.as_bytes(), lookup).collect()
    }

    fn num(n: i64) -> Token {
        Token::Number(BigInt::from(n))
    }

    #[test]
    fn test_scanner_01_numbers_and_operators() {
        assert_eq!(
            scan("12+3*(4/5)").unwrap(),
            vec![
                num(12),
                Token::BinaryOp(BinaryOp::Add),
                num(3),
                Token::BinaryOp(BinaryOp::Multiply),
                Token::LeftParen,
                num(4),
                Token::BinaryOp(BinaryOp::Divide),
                num(5),
                Token::RightParen,
            ]
        );
    }

    #[test]
    fn test_leading_sign_is_unary() {
        assert_eq!(
            scan("-5").unwrap(),
            vec![Token::UnaryOp(UnaryOp::Minus), num(5)]
        );
        assert_eq!(
            scan("+5").unwrap(),
            vec![Token::UnaryOp(UnaryOp::Plus), num(5)]
        );
    }

    #[test]
    fn test_sign_after_operator_and_open_paren_is_unary() {
        assert_eq!(
            scan("2--(-3)").unwrap(),
            vec![
                num(2),
                Token::BinaryOp(BinaryOp::Subtract),
                Token::UnaryOp(UnaryOp::Minus),
                Token::LeftParen,
                Token::UnaryOp(UnaryOp::Minus),
                num(3),
                Token::RightParen,
            ]
        );
    }

    #[test]
    fn test_sign_after_close_paren_and_identifier_is_binary() {
        assert_eq!(
            scan("(1)-a+2").unwrap(),
            vec![
                Token::LeftParen,
                num(1),
                Token::RightParen,
                Token::BinaryOp(BinaryOp::Subtract),
                Token::Identifier {
                    name: "a".into(),
                    value: BigInt::from(3)
                },
                Token::BinaryOp(BinaryOp::Add),
                num(2),
            ]
        );
    }

    #[test]
    fn test_identifiers_resolve_eagerly() {
        let tokens = scan("count").unwrap();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].value(), Some(&BigInt::from(-10)));
        assert_eq!(tokens[0].to_string(), "count");
    }

    #[test]
    fn test_digit_letter_runs_split() {
        let tokens = scan("2a").unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0], num(2));
        assert!(matches!(&tokens[1], Token::Identifier { name, .. } if name == "a"));
    }

    #[test]
    fn test_huge_number() {
        let digits = "123456789012345678901234567890123456789";
        let tokens = scan(digits).unwrap();

        assert_eq!(tokens, vec![Token::Number(digits.parse().unwrap())]);
    }

    #[test]
    fn test_unknown_identifier_is_invalid_expression() {
        assert!(matches!(scan("1+b"), Err(CalculatorError::InvalidExpression)));
    }

    #[test]
    fn test_identifiers_are_case_sensitive() {
        assert!(matches!(scan("A"), Err(CalculatorError::InvalidExpression)));
    }

    #[test]
    fn test_illegal_characters() {
        for source in ["1%2", "1.5", "a_b", "2^3", "x=1"] {
            assert!(
                matches!(scan(source), Err(CalculatorError::InvalidExpression)),
                "expected invalid expression for {:?}",
                source
            );
        }
    }

    #[test]
    fn test_star_or_slash_without_left_operand() {
        for source in ["*2", "2+*3", "(/2)"] {
            assert!(
                matches!(scan(source), Err(CalculatorError::InvalidExpression)),
                "expected invalid expression for {:?}",
                source
            );
        }
    }

    #[test]
    fn test_scanner_stops_after_error() {
        let results: Vec<_> = Scanner::new(b"1$2+3", lookup).collect();

        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
    }
}
