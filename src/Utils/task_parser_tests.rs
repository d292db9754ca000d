/////////////////////////////TESTS////////////////////////////////////////////////////
/*
tests:
title, key and value parsing
values with spaces (expressions)
section and document parsing
template usage: missing keys become None, unknown keys are rejected
comments and empty lines
file-based parsing
*/

#[cfg(test)]
mod tests1 {
    use crate::Utils::task_parser::{
        Value, parse_document, parse_document_as, parse_key, parse_key_value_pair,
        parse_section, parse_title, parse_value, parse_value_list, template_from,
    };

    #[test]
    fn test_parse_title() {
        let (remaining, title) = parse_title("integral\nfunction: x").unwrap();
        assert_eq!(title, "integral");
        assert_eq!(remaining, "function: x");

        let (remaining, title) = parse_title("solver_settings  \n  parallel: true").unwrap();
        assert_eq!(title, "solver_settings");
        assert_eq!(remaining, "parallel: true");
    }

    #[test]
    fn test_parse_key() {
        let (remaining, key) = parse_key("gauss_order: 64").unwrap();
        assert_eq!(key, "gauss_order");
        assert_eq!(remaining, ": 64");

        let (remaining, key) = parse_key("key123: value1").unwrap();
        assert_eq!(key, "key123");
        assert_eq!(remaining, ": value1");
    }

    #[test]
    fn test_parse_value() {
        let (remaining, value) = parse_value("simpson, gauss").unwrap();
        assert_eq!(value, Value::String("simpson".to_string()));
        assert_eq!(remaining, ", gauss");

        let (remaining, value) = parse_value("123\nnext: 1").unwrap();
        assert_eq!(value, Value::Integer(123));
        assert_eq!(remaining, "\nnext: 1");

        let (_, value) = parse_value("1e-3").unwrap();
        assert_eq!(value, Value::Float(1e-3));

        let (_, value) = parse_value("false;").unwrap();
        assert_eq!(value, Value::Boolean(false));
    }

    #[test]
    fn test_value_with_spaces_is_one_value() {
        let (remaining, value) = parse_value("x * sin(x) + 1\n").unwrap();
        assert_eq!(value, Value::String("x * sin(x) + 1".to_string()));
        assert_eq!(remaining, "\n");
    }

    #[test]
    fn test_parse_value_list() {
        let (remaining, values) = parse_value_list("trapezoid, 123, 45.67, true").unwrap();
        assert_eq!(
            values,
            vec![
                Value::String("trapezoid".to_string()),
                Value::Integer(123),
                Value::Float(45.67),
                Value::Boolean(true)
            ]
        );
        assert_eq!(remaining, "");

        let (remaining, values) = parse_value_list("").unwrap();
        assert_eq!(values, Vec::<Value>::new());
        assert_eq!(remaining, "");

        // an empty list stops at the end of its line
        let (remaining, values) = parse_value_list("\nnext: 1").unwrap();
        assert!(values.is_empty());
        assert_eq!(remaining, "\nnext: 1");
    }

    #[test]
    fn test_parse_key_value_pair() {
        let (remaining, (key, values)) = parse_key_value_pair("upper : pi/2 ").unwrap();
        assert_eq!(key, "upper");
        assert_eq!(values, vec![Value::String("pi/2".to_string())]);
        assert_eq!(remaining, "");

        let (remaining, (key, values)) = parse_key_value_pair("methods: simpson, gauss;").unwrap();
        assert_eq!(key, "methods");
        assert_eq!(
            values,
            vec![
                Value::String("simpson".to_string()),
                Value::String("gauss".to_string())
            ]
        );
        assert_eq!(remaining, ";");

        let (_, (key, values)) = parse_key_value_pair("log_file:").unwrap();
        assert_eq!(key, "log_file");
        assert!(values.is_empty());
    }

    #[test]
    fn test_parse_section() {
        let input = "integral\nfunction: exp(-x^2)\nlower: -1\nupper: 1\nsolver_settings\n";
        let (remaining, (title, map)) = parse_section(input).unwrap();
        assert_eq!(title, "integral");
        assert_eq!(map.len(), 3);
        assert_eq!(map["function"], vec![Value::String("exp(-x^2)".to_string())]);
        assert_eq!(map["lower"], vec![Value::Integer(-1)]);
        assert_eq!(remaining, "solver_settings\n");
    }

    #[test]
    fn test_parse_document() {
        let input = "integral\n  function: x^2\n  digits: 8\nsolver_settings\n  parallel: true\n";
        let (remaining, doc) = parse_document(input).unwrap();
        assert_eq!(remaining, "");
        assert_eq!(doc.len(), 2);
        assert_eq!(
            doc["integral"]["digits"],
            Some(vec![Value::Integer(8)])
        );
        assert_eq!(
            doc["solver_settings"]["parallel"],
            Some(vec![Value::Boolean(true)])
        );
    }

    #[test]
    fn test_parse_document_with_comments() {
        let input = "# integral of a gaussian\nintegral\n// the integrand\nfunction: exp(-x^2)\n\n% bounds\nlower: 0\nupper: 3\n";
        let doc = parse_document_as(input, None).unwrap();
        assert_eq!(doc["integral"].len(), 3);
        assert_eq!(
            doc["integral"]["upper"].as_ref().unwrap()[0].as_float(),
            Some(3.0)
        );
    }

    #[test]
    fn test_parse_document_with_template() {
        let template = template_from(&[
            ("integral", &["function", "lower", "upper", "digits"]),
            ("solver_settings", &["parallel"]),
        ]);
        let input = "integral\nfunction: x\nlower: 0\nupper: 2\n";
        let doc = parse_document_as(input, Some(template)).unwrap();
        assert_eq!(doc["integral"].len(), 4);
        assert!(doc["integral"]["digits"].is_none());
        assert!(doc["integral"]["function"].is_some());
        assert!(doc["solver_settings"]["parallel"].is_none());
    }

    #[test]
    fn test_template_rejects_unknown_keys() {
        let template = template_from(&[("integral", &["function"])]);
        let err = parse_document_as("integral\nfunction: x\nfuntion: y\n", Some(template.clone()))
            .unwrap_err();
        assert!(err.contains("funtion"));
        let err = parse_document_as("integrals\nfunction: x\n", Some(template)).unwrap_err();
        assert!(err.contains("integrals"));
    }

    #[test]
    fn test_malformed_documents() {
        assert!(parse_document_as("", None).is_err());
        assert!(parse_document_as("integral\n", None).is_err());
        assert!(parse_document_as("integral\nfunction x\n", None).is_err());
    }

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Integer(3).as_float(), Some(3.0));
        assert_eq!(Value::Float(0.5).as_integer(), None);
        assert_eq!(Value::Boolean(true).as_boolean(), Some(true));
        assert_eq!(Value::String("pi".to_string()).as_string().unwrap(), "pi");
        assert_eq!(Value::Float(2.5).to_string_value(), "2.5");
        assert_eq!(format!("{}", Value::Integer(-4)), "-4");
    }
}

#[cfg(test)]
mod tests2 {
    use crate::Utils::task_parser::{Value, parse_file_as, template_from};
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_parse_document_from_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("task.txt");

        let mut file = File::create(&file_path).unwrap();
        writeln!(file, "integral").unwrap();
        writeln!(file, "  function: 1/(1 + x^2)").unwrap();
        writeln!(file, "  lower: 0").unwrap();
        writeln!(file, "  upper: 1").unwrap();
        writeln!(file, "  methods: simpson, gauss").unwrap();
        writeln!(file, "solver_settings").unwrap();
        writeln!(file, "  gauss_order: 32").unwrap();

        let template = template_from(&[
            ("integral", &["function", "lower", "upper", "methods"]),
            ("solver_settings", &["gauss_order", "parallel"]),
        ]);
        let result = parse_file_as(&file_path, Some(template)).unwrap();

        assert_eq!(result.len(), 2);
        let integral = &result["integral"];
        assert_eq!(
            integral["function"].as_ref().unwrap(),
            &vec![Value::String("1/(1 + x^2)".to_string())]
        );
        assert_eq!(
            integral["methods"].as_ref().unwrap(),
            &vec![
                Value::String("simpson".to_string()),
                Value::String("gauss".to_string())
            ]
        );
        assert_eq!(
            result["solver_settings"]["gauss_order"],
            Some(vec![Value::Integer(32)])
        );
        assert_eq!(result["solver_settings"]["parallel"], None);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let err = parse_file_as(&dir.path().join("absent.txt"), None).unwrap_err();
        assert!(err.contains("cannot read task file"));
    }
}
