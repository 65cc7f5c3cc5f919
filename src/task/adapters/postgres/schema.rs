//! Diesel schema for the task board table.

diesel::table! {
    /// Task rows; `id` and both timestamps are assigned by the database.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Trimmed task title.
        #[max_length = 200]
        title -> Varchar,
        /// Optional trimmed description.
        #[max_length = 500]
        description -> Nullable<Varchar>,
        /// Status column name.
        #[max_length = 16]
        status -> Varchar,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
