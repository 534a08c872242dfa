//! hidden fetch macros 🤫

#[doc(hidden)]
#[macro_use]
pub mod error;

/// Match a `&str` against string literals, ignoring ASCII case.
///
/// Unlike a plain `match`, a `_ => fallback` arm is required,
/// as there is no way to prove exhaustiveness over arbitrary input.
/// The input is compared as-is, it is not trimmed.
/// Every arm ends with a comma, block arms included.
#[doc(hidden)]
#[macro_export]
macro_rules! __match_ignore_ascii_case_str {
    (match ($s:expr) { $caseA:literal $(| $caseAVar:literal)* $(if $condA:expr)? => $retA:expr $(, $caseB:literal $(| $caseBVar:literal)* $(if $condB:expr)? => $retB:expr)*, _ => $fallback:expr $(,)? }) => {
        {
            let s: &str = $s;
            if $($condA &&)? (s.eq_ignore_ascii_case($caseA) $(|| s.eq_ignore_ascii_case($caseAVar))*) {
                $retA
            }
            $(
                else if $($condB &&)? (s.eq_ignore_ascii_case($caseB) $(|| s.eq_ignore_ascii_case($caseBVar))*) {
                    $retB
                }
            )*
            else {
                $fallback
            }
        }
    };
}
#[doc(inline)]
pub use crate::__match_ignore_ascii_case_str as match_ignore_ascii_case_str;

#[doc(inline)]
pub use paste::paste;

#[doc(hidden)]
#[macro_export]
macro_rules! __generate_set_and_with {
    (
        $(#[$outer_doc:meta])*
        $vis:vis fn $fn_name:ident(mut $self_token:ident, $param_name:ident: Option<$param_ty:ty> $(,)?) -> Self {
            $($body:tt)*
        }
    ) => {
        $crate::macros::paste! {
            $(#[$outer_doc])*
            #[must_use]
            $vis fn [<maybe_with_ $fn_name>](mut $self_token, $param_name: Option<$param_ty>) -> Self {
                $($body)*
            }

            $(#[$outer_doc])*
            $vis fn [<maybe_set_ $fn_name>](&mut $self_token, $param_name: Option<$param_ty>) -> &mut Self {
                $($body)*
            }

            $(#[$outer_doc])*
            #[must_use]
            $vis fn [<with_ $fn_name>](mut $self_token, $param_name: $param_ty) -> Self {
                let $param_name: Option<$param_ty> = Some($param_name);
                $($body)*
            }

            $(#[$outer_doc])*
            $vis fn [<set_ $fn_name>](&mut $self_token, $param_name: $param_ty) -> &mut Self {
                let $param_name: Option<$param_ty> = Some($param_name);
                $($body)*
            }

            $(#[$outer_doc])*
            #[must_use]
            $vis fn [<without_ $fn_name>](mut $self_token) -> Self {
                let $param_name: Option<$param_ty> = None;
                $($body)*
            }

            $(#[$outer_doc])*
            $vis fn [<unset_ $fn_name>](&mut $self_token) -> &mut Self {
                let $param_name: Option<$param_ty> = None;
                $($body)*
            }
        }
    };
    (
        $(#[$outer_doc:meta])*
        $vis:vis const fn $fn_name:ident(mut $self_token:ident, $($param_name:ident: $param_ty:ty),+ $(,)?) -> Self {
            $($body:tt)*
        }
    ) => {
        $crate::macros::paste! {
            $(#[$outer_doc])*
            #[must_use]
            $vis const fn [<with_ $fn_name>](mut $self_token, $($param_name: $param_ty),+) -> Self {
                $($body)*
            }

            $(#[$outer_doc])*
            $vis const fn [<set_ $fn_name>](&mut $self_token, $($param_name: $param_ty),+) -> &mut Self {
                $($body)*
            }
        }
    };
    (
        $(#[$outer_doc:meta])*
        $vis:vis fn $fn_name:ident(mut $self_token:ident, $($param_name:ident: $param_ty:ty),+ $(,)?) -> Self {
            $($body:tt)*
        }
    ) => {
        $crate::macros::paste! {
            $(#[$outer_doc])*
            #[must_use]
            $vis fn [<with_ $fn_name>](mut $self_token, $($param_name: $param_ty),+) -> Self {
                $($body)*
            }

            $(#[$outer_doc])*
            $vis fn [<set_ $fn_name>](&mut $self_token, $($param_name: $param_ty),+) -> &mut Self {
                $($body)*
            }
        }
    };
}
#[doc(inline)]
pub use crate::__generate_set_and_with as generate_set_and_with;

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn match_ignore_ascii_case_str_happy_simple() {
        let s = "content-type";
        let result = match_ignore_ascii_case_str!(match (s) {
            "content-type" => true,
            _ => false,
        });
        assert!(result);
    }

    #[test]
    fn match_ignore_ascii_case_str_happy_mixed_case() {
        let s = "Content-Type";
        let result = match_ignore_ascii_case_str!(match (s) {
            "content-type" => true,
            _ => false,
        });
        assert!(result);
    }

    #[test]
    fn match_ignore_ascii_case_str_happy_variants() {
        let result = match_ignore_ascii_case_str!(match ("CONTENT-LANGUAGE") {
            "accept" => 1,
            "accept-language" | "content-language" => 2,
            "content-type" => 3,
            _ => 4,
        });
        assert_eq!(result, 2);
    }

    #[test]
    fn match_ignore_ascii_case_str_block_arms() {
        for (input, expected) in [
            ("Accept", 1),
            ("accept-language", 2),
            ("CONTENT-TYPE", 3),
            ("range", 0),
        ] {
            let result = match_ignore_ascii_case_str!(match (input) {
                "accept" => 1,
                "accept-language" | "content-language" => {
                    let n = input.len();
                    if n > 0 { 2 } else { 0 }
                },
                "content-type" => {
                    3
                },
                _ => 0,
            });
            assert_eq!(result, expected, "input: {input}");
        }
    }

    #[test]
    fn match_ignore_ascii_case_str_no_trim() {
        let result = match_ignore_ascii_case_str!(match (" accept") {
            "accept" => 1,
            _ => 2,
        });
        assert_eq!(result, 2);
    }

    #[test]
    fn match_ignore_ascii_case_str_condition() {
        let s = "Accept";
        let result = match_ignore_ascii_case_str!(match (s) {
            "range" => 1,
            "accept" if s.len() == 5 => 2,
            "accept" => 3,
            _ => 4,
        });
        assert_eq!(result, 3);
    }

    #[test]
    fn test_generate_set_and_with() {
        #[derive(Default)]
        struct Builder {
            limit: usize,
            label: Option<String>,
        }

        impl Builder {
            generate_set_and_with!(
                /// Set the limit
                fn limit(mut self, limit: usize) -> Self {
                    self.limit = limit;
                    self
                }
            );

            generate_set_and_with!(
                /// Set an optional label
                fn label(mut self, label: Option<String>) -> Self {
                    self.label = label;
                    self
                }
            );
        }

        let builder = Builder::default().with_limit(128);
        assert_eq!(builder.limit, 128);

        let mut builder = Builder::default();
        builder.set_limit(1024);
        assert_eq!(builder.limit, 1024);

        let builder = builder.with_label("x".to_owned());
        assert_eq!(builder.label.as_deref(), Some("x"));
        let mut builder = builder.without_label();
        assert_eq!(builder.label, None);
        builder.maybe_set_label(Some("y".to_owned()));
        assert_eq!(builder.label.as_deref(), Some("y"));
        builder.unset_label();
        assert_eq!(builder.label, None);
    }
}
