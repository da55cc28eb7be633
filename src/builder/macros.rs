//! Macros for declaring closed sets of states.

/// Declare a state enum and its `State` implementation.
///
/// Each variant's name defaults to the variant identifier; `=> "label"`
/// overrides it. The enum also gets an `ALL` constant listing every variant
/// in declaration order and an `all_states()` constructor for a
/// [`StateSet`](crate::core::StateSet) holding them.
///
/// # Example
///
/// ```
/// use stateguard::core::State;
/// use stateguard::state_enum;
///
/// state_enum! {
///     pub enum City {
///         Delhi => "delhi",
///         Gurgaon => "gurgaon",
///         Noida,
///     }
/// }
///
/// assert_eq!(City::Delhi.name(), "delhi");
/// assert_eq!(City::Noida.name(), "Noida");
/// assert_eq!(City::ALL.len(), 3);
/// assert!(City::all_states().contains(&City::Gurgaon));
/// ```
#[macro_export]
macro_rules! state_enum {
    (@name $variant:ident $label:literal) => {
        $label
    };
    (@name $variant:ident) => {
        stringify!($variant)
    };
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $label:literal)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            #[allow(dead_code)]
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// A state set declaring every variant.
            #[allow(dead_code)]
            pub fn all_states() -> $crate::core::StateSet<Self> {
                $crate::core::StateSet::new(Self::ALL.iter().copied())
            }
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => $crate::state_enum!(@name $variant $($label)?)),*
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::State;

    state_enum! {
        enum TestState {
            Sky => "sky",
            Tree => "tree",
            Ground => "ground",
        }
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(TestState::Sky.name(), "sky");
        assert_eq!(TestState::Tree.name(), "tree");
        assert_eq!(TestState::Ground.name(), "ground");
    }

    #[test]
    fn all_lists_variants_in_order() {
        assert_eq!(
            TestState::ALL,
            &[TestState::Sky, TestState::Tree, TestState::Ground]
        );
        assert_eq!(
            TestState::all_states().names(),
            vec!["sky", "tree", "ground"]
        );
    }

    #[test]
    fn state_enum_defaults_to_variant_names() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
        }

        assert_eq!(PublicState::A.name(), "A");
        assert_eq!(PublicState::B.name(), "B");
    }

    #[test]
    fn state_enum_round_trips_through_json() {
        let json = serde_json::to_string(&TestState::Tree).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, TestState::Tree);
    }
}
