use super::RecordSchema;

/// Table metadata derived from a [`RecordSchema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,

    /// Primary key columns, partition key first
    pub key_columns: Vec<String>,

    /// Mapped columns in declaration order
    pub columns: Vec<Column>,
}

/// A mapped column and the index of its field in `Record::fields`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub position: usize,
}

impl Table {
    /// Builds the table for a descriptor.
    ///
    /// # Panics
    ///
    /// Panics if the descriptor has no columns, repeats a column, or names a
    /// key column it does not map.
    pub fn from_schema(schema: &RecordSchema) -> Table {
        assert!(
            !schema.columns.is_empty(),
            "record `{}` maps no columns",
            schema.type_name
        );

        let columns: Vec<Column> = schema
            .columns
            .iter()
            .enumerate()
            .map(|(position, name)| Column {
                name: name.to_string(),
                position,
            })
            .collect();

        for (i, column) in columns.iter().enumerate() {
            assert!(
                !columns[..i].iter().any(|c| c.name == column.name),
                "record `{}` maps column `{}` twice",
                schema.type_name,
                column.name
            );
        }

        let key_columns: Vec<String> = if schema.key.is_empty() {
            vec![columns[0].name.clone()]
        } else {
            schema.key.iter().map(|name| name.to_string()).collect()
        };

        for key in &key_columns {
            assert!(
                columns.iter().any(|c| &c.name == key),
                "record `{}` has key column `{}` which is not a mapped column",
                schema.type_name,
                key
            );
        }

        Table {
            name: schema.table_name().to_string(),
            key_columns,
            columns,
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.columns.iter().map(|column| column.name.as_str())
    }

    pub fn is_key(&self, name: &str) -> bool {
        self.key_columns.iter().any(|key| key == name)
    }

    /// Key columns in key order, with their field positions.
    pub fn key(&self) -> impl Iterator<Item = &Column> + '_ {
        self.key_columns
            .iter()
            .filter_map(|key| self.column(key))
    }
}
