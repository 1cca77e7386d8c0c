//! Macros for declaring state sets.

/// Declare a closed unit-variant enum and implement `State` for it.
///
/// Besides the `State` impl, the macro derives `Clone`, `PartialEq`, `Debug`
/// and the serde traits, implements `Display` (the variant name), and adds a
/// `variants()` function listing every variant in declaration order. Extra
/// derives such as `Copy` or `Eq` can be passed as attributes.
///
/// # Example
///
/// ```
/// use vending_fsm::core::State;
/// use vending_fsm::state_enum;
///
/// state_enum! {
///     #[derive(Copy, Eq)]
///     pub enum Ticket {
///         Open,
///         Resolved,
///         Rejected,
///     }
///     final: [Resolved, Rejected]
///     error: [Rejected]
/// }
///
/// assert_eq!(Ticket::variants().len(), 3);
/// assert_eq!(Ticket::Open.to_string(), "Open");
/// assert!(Ticket::Rejected.is_error());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            $vis fn variants() -> &'static [Self] {
                &[$(Self::$variant),*]
            }
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            #[allow(unreachable_patterns)]
            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }

            #[allow(unreachable_patterns)]
            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
