// Table-building macros shared by the modules under `services`.

/// Declares one `pub const` [`ResourceType`](crate::iam::ResourceType) per
/// entry, plus `RESOURCE_TYPES` listing them in order.
///
/// ```ignore
/// resource_types! {
///     FUNCTION = "function" => "arn:${Partition}:lambda:${Region}:${Account}:function:${FunctionName}";
/// }
/// ```
macro_rules! resource_types {
    ($(
        $(#[$meta:meta])*
        $ident:ident = $name:literal => $arn:literal $([$($key:literal),* $(,)?])?;
    )*) => {
        $(
            $(#[$meta])*
            pub const $ident: $crate::iam::ResourceType = $crate::iam::ResourceType {
                name: $name,
                arn: $arn,
                condition_keys: &[$($($key),*)?],
            };
        )*

        pub const RESOURCE_TYPES: &[&$crate::iam::ResourceType] = &[$(&$ident),*];
    };
}

/// Declares a service's `Action` enum and its `ACTIONS` metadata table.
///
/// Each entry is `Name => AccessLevel [RESOURCE, ...] ["condition:key", ...];`.
/// The documentation link defaults to `{docs}API_{Name}.html` and can be
/// overridden with `Name @ "https://..."`. `docs` is also exported as
/// `API_REFERENCE`.
macro_rules! actions {
    (@docs $docs:literal, $name:ident) => {
        concat!($docs, "API_", stringify!($name), ".html")
    };
    (@docs $docs:literal, $name:ident, $link:expr) => {
        $link
    };
    (
        prefix = $prefix:literal;
        docs = $docs:literal;
        $(
            $(#[$meta:meta])*
            $name:ident $(@ $link:expr)? => $level:ident [$($resource:ident),* $(,)?] [$($key:literal),* $(,)?];
        )+
    ) => {
        /// Base URL of the service's API reference.
        pub const API_REFERENCE: &str = $docs;

        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Action {
            /// Every action of the service.
            All,
            $(
                $(#[$meta])*
                $name,
            )+
        }

        pub const ACTIONS: &[$crate::iam::ActionDef] = &[
            $(
                $crate::iam::ActionDef {
                    service: $prefix,
                    name: stringify!($name),
                    access_level: $crate::iam::AccessLevel::$level,
                    docs: actions!(@docs $docs, $name $(, $link)?),
                    resource_types: &[$(&$resource),*],
                    condition_keys: &[$($key),*],
                },
            )+
        ];

        impl Action {
            const VARIANTS: &'static [Action] = &[Action::All, $(Action::$name),+];

            pub const fn as_str(self) -> &'static str {
                match self {
                    Action::All => concat!($prefix, ":*"),
                    $(Action::$name => concat!($prefix, ":", stringify!($name)),)+
                }
            }
        }

        impl $crate::iam::IamAction for Action {
            const PREFIX: &'static str = $prefix;

            fn as_str(self) -> &'static str {
                Action::as_str(self)
            }

            fn definition(self) -> Option<&'static $crate::iam::ActionDef> {
                match self {
                    Action::All => None,
                    // Variants after `All` are declared in table order.
                    other => ACTIONS.get(other as usize - 1),
                }
            }

            fn variants() -> &'static [Self] {
                Self::VARIANTS
            }
        }

        impl std::fmt::Display for Action {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for Action {
            type Err = $crate::Error;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::VARIANTS
                    .iter()
                    .copied()
                    .find(|action| action.as_str().eq_ignore_ascii_case(value))
                    .ok_or_else(|| $crate::Error::UnknownAction {
                        service: $prefix.to_string(),
                        action: value.to_string(),
                    })
            }
        }
    };
}
