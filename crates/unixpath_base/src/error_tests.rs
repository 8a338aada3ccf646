/* 📖 # Why use a separate file for these error tests?

The Debug output of an error embeds source locations once span traces are captured.
Keeping the tests out of error.rs stops edits there from churning the snapshots.
*/

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::{ResultExt, UnixPathError, UnixPathResult};
    use expect_test::expect;
    use std::error::Error;
    use std::io;
    use std::path::PathBuf;

    fn file_error(message: &str) -> UnixPathError {
        UnixPathError::new(ErrorKind::FileError {
            path: PathBuf::from("/tmp/level.map"),
            source: io::Error::new(io::ErrorKind::NotFound, message.to_string()),
        })
    }

    #[test]
    fn test_error_from_file_error() {
        let error = file_error("file not found");
        match error.kind() {
            ErrorKind::FileError { path, .. } => {
                assert_eq!(path, &PathBuf::from("/tmp/level.map"));
            }
            _ => panic!("Expected FileError variant"),
        }
    }

    #[test]
    fn test_error_context_attachment() {
        let error = UnixPathError::message("original error")
            .context("first context")
            .context("second context");

        assert_eq!(error.get_context().len(), 2);
        assert_eq!(error.get_context()[0], "first context");
        assert_eq!(error.get_context()[1], "second context");
    }

    #[test]
    fn test_error_with_context_lazy_evaluation() {
        let mut called = false;
        let error = UnixPathError::message("error").with_context(|| {
            called = true;
            "lazy context".to_string()
        });

        assert!(called);
        assert_eq!(error.get_context()[0], "lazy context");
    }

    #[test]
    fn test_error_display_with_multiple_contexts() {
        let error = UnixPathError::message("root error")
            .context("first")
            .context("second")
            .context("third");
        assert_eq!(error.to_string(), "first: second: third: root error");
    }

    #[test]
    fn test_error_display_file_error() {
        let display = file_error("not found").to_string();
        assert!(display.contains("/tmp/level.map"));
        assert!(display.contains("not found"));
    }

    #[test]
    fn test_error_display_non_utf8_path() {
        let error = UnixPathError::new(ErrorKind::NonUtf8Path {
            path: PathBuf::from("textures/base"),
        });
        assert_eq!(
            error.to_string(),
            "Path is not valid UTF-8: textures/base"
        );
    }

    #[test]
    fn test_error_display_script_parse() {
        let error = UnixPathError::new(ErrorKind::ScriptParse {
            line: 3,
            message: "unknown step 'jump'".to_string(),
        })
        .context("running script");
        assert_eq!(
            error.to_string(),
            "running script: Script error at line 3: unknown step 'jump'"
        );
    }

    #[test]
    fn test_error_display_multiple_errors() {
        let kind = ErrorKind::Multiple {
            errors: vec![
                UnixPathError::message("error 1"),
                UnixPathError::message("error 2"),
            ],
            count: 2,
        };
        let error = UnixPathError::new(kind);
        assert_eq!(
            error.to_string(),
            "Multiple errors occurred (2 total): error 1"
        );
    }

    #[test]
    fn test_error_display_multiple_without_errors() {
        let error = UnixPathError::new(ErrorKind::Multiple {
            errors: vec![],
            count: 0,
        });
        assert_eq!(error.to_string(), "Multiple errors occurred (0 total)");
    }

    #[test]
    fn test_error_from_impl() {
        let error: UnixPathError = ErrorKind::Message {
            message: "test".to_string(),
        }
        .into();
        match error.kind() {
            ErrorKind::Message { message } => assert_eq!(message, "test"),
            _ => panic!("Expected Message variant"),
        }
    }

    #[test]
    fn test_error_source_file_error() {
        assert!(file_error("access denied").source().is_some());
    }

    #[test]
    fn test_error_source_message() {
        assert!(UnixPathError::message("test").source().is_none());
    }

    #[test]
    fn test_error_source_follows_cause() {
        let error = UnixPathError::message("outer").caused_by(UnixPathError::message("inner"));
        let source = error.source().expect("cause should be the source");
        assert_eq!(source.to_string(), "inner");
    }

    #[test]
    fn test_error_root_cause_file_error() {
        let error = UnixPathError::message("loading script").caused_by(file_error("not found"));
        assert_eq!(error.root_cause().to_string(), "not found");
    }

    #[test]
    fn test_error_root_cause_message() {
        let error = UnixPathError::message("test");
        assert_eq!(error.root_cause().to_string(), "test");
    }

    #[test]
    fn test_result_ext_context_success() {
        let result: UnixPathResult<i32> = Ok(42);
        assert_eq!(result.context("operation failed").unwrap(), 42);
    }

    #[test]
    fn test_result_ext_chaining() {
        let result: UnixPathResult<i32> = Err(Box::new(UnixPathError::message("root")));
        let err = result
            .context("step 1")
            .context("step 2")
            .with_context(|| "step 3".to_string())
            .unwrap_err();
        assert_eq!(err.to_string(), "step 1: step 2: step 3: root");
    }

    #[test]
    fn test_err_macro_formats_message() {
        let error = crate::err!("bad segment '{}'", "a/b");
        assert_eq!(error.to_string(), "bad segment 'a/b'");
    }

    #[test]
    fn test_bail_macro_returns_early() {
        fn check(name: &str) -> UnixPathResult<()> {
            if name.is_empty() {
                crate::bail!("empty name");
            }
            Ok(())
        }
        assert!(check("maps").is_ok());
        assert_eq!(check("").unwrap_err().to_string(), "empty name");
    }

    #[test]
    fn test_debug_context_tree() {
        let error = UnixPathError::message("base error")
            .context("operation failed")
            .with_context(|| "additional context".to_string());

        expect![[r#"
            base error
            ├─ operation failed
            └─ additional context
        "#]]
        .assert_debug_eq(&error);
    }

    #[test]
    fn test_debug_multiple_nested_errors() {
        let error_1 = UnixPathError::message("error 1").context("context 1");
        let error_2 = UnixPathError::message("error 2")
            .context("context 2")
            .caused_by(error_1);
        let error_3 = UnixPathError::message("error 3")
            .context("context 3")
            .caused_by(error_2);

        expect![[r#"
            error 3
            ├─ context 3
            └─ cause: error 2
               ├─ context 2
               └─ cause: error 1
                  └─ context 1
        "#]]
        .assert_debug_eq(&error_3);
    }
}
