//! Choice enums backed by PostgreSQL `ENUM` types.
//!
//! Each variant's label matches the value list in the corresponding
//! `CREATE TYPE ... AS ENUM` migration, and is also its JSON form.

macro_rules! define_choice_enum {
    (
        $(#[$meta:meta])*
        $name:ident as $pg_type:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash,
            serde::Serialize, serde::Deserialize, sqlx::Type,
        )]
        #[sqlx(type_name = $pg_type)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                #[sqlx(rename = $label)]
                $variant
            ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The database/JSON label.
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

define_choice_enum! {
    /// Project lifecycle status.
    ProjectStatus as "project_status" {
        Planning = "planning",
        InProgress = "in_progress",
        Completed = "completed",
        OnHold = "on_hold",
    }
}

define_choice_enum! {
    /// Task priority.
    TaskPriority as "task_priority" {
        Low = "low",
        Medium = "medium",
        High = "high",
    }
}

impl Default for ProjectStatus {
    fn default() -> Self {
        Self::Planning
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        Self::Medium
    }
}
