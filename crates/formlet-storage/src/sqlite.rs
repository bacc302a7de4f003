//! SQLite implementation of [`FormStore`].
//!
//! [`SqliteStore`] persists forms, the five question tables, their option
//! tables, and the five response tables in a SQLite database with WAL mode
//! and schema migrations. Multi-row writes (question + options, ranking
//! response group + sub-rows) are wrapped in transactions.
//!
//! Ownership is enforced per statement: every mutating query that takes an
//! `owner_id` joins against `forms.owner_id` in its own WHERE clause, so a
//! row changed count of zero means "missing or not yours" without saying
//! which.

use rusqlite::{params, Connection, OptionalExtension};
use uuid::Uuid;

use formlet_core::question::{
    ChoiceOption, ChoiceQuestion, DateQuestion, RankOption, RankingQuestion, RatingQuestion,
    TextQuestion,
};
use formlet_core::response::{encode_date, Answer};
use formlet_core::{OptionId, QuestionId, QuestionKind, QuestionRef, RankOptionId};

use crate::error::StorageError;
use crate::traits::FormStore;
use crate::types::{FormId, FormSummary};

/// SQLite-backed implementation of [`FormStore`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Opens (or creates) a SQLite database at `path`.
    pub fn new(path: &str) -> Result<Self, StorageError> {
        let conn = crate::schema::open_database(path)?;
        Ok(SqliteStore { conn })
    }

    /// Opens an in-memory SQLite database (for testing).
    pub fn in_memory() -> Result<Self, StorageError> {
        let conn = crate::schema::open_in_memory()?;
        Ok(SqliteStore { conn })
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// The table owning a question variant's rows.
    fn question_table(kind: QuestionKind) -> &'static str {
        match kind {
            QuestionKind::Choice => "choice_questions",
            QuestionKind::Text => "text_questions",
            QuestionKind::Rating => "rating_questions",
            QuestionKind::Date => "date_questions",
            QuestionKind::Ranking => "ranking_questions",
        }
    }

    /// The response table and its question-reference column for a variant.
    fn response_table(kind: QuestionKind) -> (&'static str, &'static str) {
        match kind {
            QuestionKind::Choice => ("choice_responses", "choice_id"),
            QuestionKind::Text => ("text_responses", "text_id"),
            QuestionKind::Rating => ("rating_responses", "rating_id"),
            QuestionKind::Date => ("date_responses", "date_id"),
            QuestionKind::Ranking => ("ranking_responses", "ranking_id"),
        }
    }

    /// Whether `question` (in `table`) belongs to `form` and `form` to
    /// `owner_id`.
    fn question_in_owned_form(
        &self,
        table: &str,
        question: QuestionId,
        form: &FormId,
        owner_id: &str,
    ) -> Result<bool, StorageError> {
        let sql = format!(
            "SELECT EXISTS(
                 SELECT 1 FROM {table} q JOIN forms f ON f.id = q.form_id
                 WHERE q.id = ?1 AND f.id = ?2 AND f.owner_id = ?3
             )"
        );
        let exists: bool =
            self.conn
                .query_row(&sql, params![question.0, form.0, owner_id], |row| row.get(0))?;
        Ok(exists)
    }

    fn choice_options_for(&self, question: QuestionId) -> Result<Vec<ChoiceOption>, StorageError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, option, order_index FROM choice_options
             WHERE choice_id = ?1 ORDER BY order_index, id",
        )?;
        let options = stmt
            .query_map(params![question.0], |row| {
                Ok(ChoiceOption {
                    id: OptionId(row.get(0)?),
                    text: row.get(1)?,
                    order_index: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(options)
    }

    fn ranking_options_for(&self, question: QuestionId) -> Result<Vec<RankOption>, StorageError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, option, order_index FROM ranking_options
             WHERE ranking_id = ?1 ORDER BY order_index, id",
        )?;
        let options = stmt
            .query_map(params![question.0], |row| {
                Ok(RankOption {
                    id: RankOptionId(row.get(0)?),
                    text: row.get(1)?,
                    order_index: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(options)
    }
}

impl FormStore for SqliteStore {
    // -----------------------------------------------------------------------
    // Form lifecycle
    // -----------------------------------------------------------------------

    fn create_form(&mut self, name: &str, owner_id: &str) -> Result<FormId, StorageError> {
        let id = Uuid::new_v4().to_string();
        self.conn.execute(
            "INSERT INTO forms (id, name, owner_id) VALUES (?1, ?2, ?3)",
            params![id, name, owner_id],
        )?;
        Ok(FormId(id))
    }

    fn rename_form(
        &mut self,
        form: &FormId,
        owner_id: &str,
        name: &str,
    ) -> Result<bool, StorageError> {
        let changed = self.conn.execute(
            "UPDATE forms SET name = ?1 WHERE id = ?2 AND owner_id = ?3",
            params![name, form.0, owner_id],
        )?;
        Ok(changed == 1)
    }

    fn delete_form(&mut self, form: &FormId, owner_id: &str) -> Result<bool, StorageError> {
        let changed = self.conn.execute(
            "DELETE FROM forms WHERE id = ?1 AND owner_id = ?2",
            params![form.0, owner_id],
        )?;
        Ok(changed == 1)
    }

    fn list_forms(&self, owner_id: &str) -> Result<Vec<FormSummary>, StorageError> {
        let mut stmt = self
            .conn
            .prepare_cached("SELECT id, name FROM forms WHERE owner_id = ?1 ORDER BY name, id")?;
        let forms = stmt
            .query_map(params![owner_id], |row| {
                Ok(FormSummary { id: FormId(row.get(0)?), name: row.get(1)? })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(forms)
    }

    fn form_name(&self, form: &FormId) -> Result<Option<String>, StorageError> {
        let name = self
            .conn
            .query_row("SELECT name FROM forms WHERE id = ?1", params![form.0], |row| row.get(0))
            .optional()?;
        Ok(name)
    }

    fn form_owner(&self, form: &FormId) -> Result<Option<String>, StorageError> {
        let owner = self
            .conn
            .query_row("SELECT owner_id FROM forms WHERE id = ?1", params![form.0], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(owner)
    }

    fn is_owner(&self, form: &FormId, requestor_id: &str) -> Result<bool, StorageError> {
        let exists: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM forms WHERE id = ?1 AND owner_id = ?2)",
            params![form.0, requestor_id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    // -----------------------------------------------------------------------
    // Per-variant collections
    // -----------------------------------------------------------------------

    fn choice_questions(&self, form: &FormId) -> Result<Vec<ChoiceQuestion>, StorageError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, question, order_index, required, editable
             FROM choice_questions WHERE form_id = ?1 ORDER BY id",
        )?;
        let mut questions = stmt
            .query_map(params![form.0], |row| {
                Ok(ChoiceQuestion {
                    id: QuestionId(row.get(0)?),
                    text: row.get(1)?,
                    options: Vec::new(),
                    order_index: row.get(2)?,
                    required: row.get(3)?,
                    editable: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        for question in &mut questions {
            question.options = self.choice_options_for(question.id)?;
        }
        Ok(questions)
    }

    fn text_questions(&self, form: &FormId) -> Result<Vec<TextQuestion>, StorageError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, question, order_index, required, editable
             FROM text_questions WHERE form_id = ?1 ORDER BY id",
        )?;
        let questions = stmt
            .query_map(params![form.0], |row| {
                Ok(TextQuestion {
                    id: QuestionId(row.get(0)?),
                    text: row.get(1)?,
                    order_index: row.get(2)?,
                    required: row.get(3)?,
                    editable: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(questions)
    }

    fn rating_questions(&self, form: &FormId) -> Result<Vec<RatingQuestion>, StorageError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, question, levels, order_index, required, editable
             FROM rating_questions WHERE form_id = ?1 ORDER BY id",
        )?;
        let questions = stmt
            .query_map(params![form.0], |row| {
                Ok(RatingQuestion {
                    id: QuestionId(row.get(0)?),
                    text: row.get(1)?,
                    levels: row.get(2)?,
                    order_index: row.get(3)?,
                    required: row.get(4)?,
                    editable: row.get(5)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(questions)
    }

    fn date_questions(&self, form: &FormId) -> Result<Vec<DateQuestion>, StorageError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, question, order_index, required, editable
             FROM date_questions WHERE form_id = ?1 ORDER BY id",
        )?;
        let questions = stmt
            .query_map(params![form.0], |row| {
                Ok(DateQuestion {
                    id: QuestionId(row.get(0)?),
                    text: row.get(1)?,
                    order_index: row.get(2)?,
                    required: row.get(3)?,
                    editable: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(questions)
    }

    fn ranking_questions(&self, form: &FormId) -> Result<Vec<RankingQuestion>, StorageError> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, question, order_index, required, editable
             FROM ranking_questions WHERE form_id = ?1 ORDER BY id",
        )?;
        let mut questions = stmt
            .query_map(params![form.0], |row| {
                Ok(RankingQuestion {
                    id: QuestionId(row.get(0)?),
                    text: row.get(1)?,
                    options: Vec::new(),
                    order_index: row.get(2)?,
                    required: row.get(3)?,
                    editable: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        for question in &mut questions {
            question.options = self.ranking_options_for(question.id)?;
        }
        Ok(questions)
    }

    fn question_count(&self, form: &FormId) -> Result<i64, StorageError> {
        let count: i64 = self.conn.query_row(
            "SELECT (SELECT COUNT(*) FROM choice_questions WHERE form_id = ?1)
                  + (SELECT COUNT(*) FROM text_questions WHERE form_id = ?1)
                  + (SELECT COUNT(*) FROM rating_questions WHERE form_id = ?1)
                  + (SELECT COUNT(*) FROM date_questions WHERE form_id = ?1)
                  + (SELECT COUNT(*) FROM ranking_questions WHERE form_id = ?1)",
            params![form.0],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    // -----------------------------------------------------------------------
    // Question creation
    // -----------------------------------------------------------------------

    fn insert_choice_question(
        &mut self,
        form: &FormId,
        text: &str,
        options: &[String],
        order_index: i64,
    ) -> Result<ChoiceQuestion, StorageError> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO choice_questions (form_id, question, order_index) VALUES (?1, ?2, ?3)",
            params![form.0, text, order_index],
        )?;
        let question_id = tx.last_insert_rowid();
        let mut created = Vec::with_capacity(options.len());
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO choice_options (choice_id, option, order_index) VALUES (?1, ?2, ?3)",
            )?;
            for (position, option) in options.iter().enumerate() {
                stmt.execute(params![question_id, option, position as i64])?;
                created.push(ChoiceOption {
                    id: OptionId(tx.last_insert_rowid()),
                    text: option.clone(),
                    order_index: position as i64,
                });
            }
        }
        tx.commit()?;
        Ok(ChoiceQuestion {
            id: QuestionId(question_id),
            text: text.to_string(),
            options: created,
            order_index,
            required: false,
            editable: true,
        })
    }

    fn insert_text_question(
        &mut self,
        form: &FormId,
        text: &str,
        order_index: i64,
    ) -> Result<TextQuestion, StorageError> {
        self.conn.execute(
            "INSERT INTO text_questions (form_id, question, order_index) VALUES (?1, ?2, ?3)",
            params![form.0, text, order_index],
        )?;
        Ok(TextQuestion {
            id: QuestionId(self.conn.last_insert_rowid()),
            text: text.to_string(),
            order_index,
            required: false,
            editable: true,
        })
    }

    fn insert_rating_question(
        &mut self,
        form: &FormId,
        text: &str,
        levels: u8,
        order_index: i64,
    ) -> Result<RatingQuestion, StorageError> {
        self.conn.execute(
            "INSERT INTO rating_questions (form_id, question, levels, order_index)
             VALUES (?1, ?2, ?3, ?4)",
            params![form.0, text, levels, order_index],
        )?;
        Ok(RatingQuestion {
            id: QuestionId(self.conn.last_insert_rowid()),
            text: text.to_string(),
            levels,
            order_index,
            required: false,
            editable: true,
        })
    }

    fn insert_date_question(
        &mut self,
        form: &FormId,
        text: &str,
        order_index: i64,
    ) -> Result<DateQuestion, StorageError> {
        self.conn.execute(
            "INSERT INTO date_questions (form_id, question, order_index) VALUES (?1, ?2, ?3)",
            params![form.0, text, order_index],
        )?;
        Ok(DateQuestion {
            id: QuestionId(self.conn.last_insert_rowid()),
            text: text.to_string(),
            order_index,
            required: false,
            editable: true,
        })
    }

    fn insert_ranking_question(
        &mut self,
        form: &FormId,
        text: &str,
        options: &[String],
        order_index: i64,
    ) -> Result<RankingQuestion, StorageError> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "INSERT INTO ranking_questions (form_id, question, order_index) VALUES (?1, ?2, ?3)",
            params![form.0, text, order_index],
        )?;
        let question_id = tx.last_insert_rowid();
        let mut created = Vec::with_capacity(options.len());
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO ranking_options (ranking_id, option, order_index) VALUES (?1, ?2, ?3)",
            )?;
            for (position, option) in options.iter().enumerate() {
                stmt.execute(params![question_id, option, position as i64])?;
                created.push(RankOption {
                    id: RankOptionId(tx.last_insert_rowid()),
                    text: option.clone(),
                    order_index: position as i64,
                });
            }
        }
        tx.commit()?;
        Ok(RankingQuestion {
            id: QuestionId(question_id),
            text: text.to_string(),
            options: created,
            order_index,
            required: false,
            editable: true,
        })
    }

    // -----------------------------------------------------------------------
    // Question update
    // -----------------------------------------------------------------------

    fn update_choice_question(
        &mut self,
        form: &FormId,
        owner_id: &str,
        id: QuestionId,
        text: &str,
        options: &[ChoiceOption],
        order_index: i64,
    ) -> Result<bool, StorageError> {
        let tx = self.conn.transaction()?;
        let changed = tx.execute(
            "UPDATE choice_questions SET question = ?1, order_index = ?2
             WHERE id = ?3 AND form_id = (SELECT id FROM forms WHERE id = ?4 AND owner_id = ?5)",
            params![text, order_index, id.0, form.0, owner_id],
        )?;
        if changed == 0 {
            return Ok(false);
        }
        {
            let mut stmt = tx.prepare_cached(
                "UPDATE choice_options SET option = ?1, order_index = ?2
                 WHERE id = ?3 AND choice_id = ?4",
            )?;
            for option in options {
                stmt.execute(params![option.text, option.order_index, option.id.0, id.0])?;
            }
        }
        tx.commit()?;
        Ok(true)
    }

    fn update_text_question(
        &mut self,
        form: &FormId,
        owner_id: &str,
        id: QuestionId,
        text: &str,
        order_index: i64,
    ) -> Result<bool, StorageError> {
        let changed = self.conn.execute(
            "UPDATE text_questions SET question = ?1, order_index = ?2
             WHERE id = ?3 AND form_id = (SELECT id FROM forms WHERE id = ?4 AND owner_id = ?5)",
            params![text, order_index, id.0, form.0, owner_id],
        )?;
        Ok(changed == 1)
    }

    fn update_rating_question(
        &mut self,
        form: &FormId,
        owner_id: &str,
        id: QuestionId,
        text: &str,
        levels: u8,
        order_index: i64,
    ) -> Result<bool, StorageError> {
        let changed = self.conn.execute(
            "UPDATE rating_questions SET question = ?1, levels = ?2, order_index = ?3
             WHERE id = ?4 AND form_id = (SELECT id FROM forms WHERE id = ?5 AND owner_id = ?6)",
            params![text, levels, order_index, id.0, form.0, owner_id],
        )?;
        Ok(changed == 1)
    }

    fn update_date_question(
        &mut self,
        form: &FormId,
        owner_id: &str,
        id: QuestionId,
        text: &str,
        order_index: i64,
    ) -> Result<bool, StorageError> {
        let changed = self.conn.execute(
            "UPDATE date_questions SET question = ?1, order_index = ?2
             WHERE id = ?3 AND form_id = (SELECT id FROM forms WHERE id = ?4 AND owner_id = ?5)",
            params![text, order_index, id.0, form.0, owner_id],
        )?;
        Ok(changed == 1)
    }

    fn update_ranking_question(
        &mut self,
        form: &FormId,
        owner_id: &str,
        id: QuestionId,
        text: &str,
        options: &[RankOption],
        order_index: i64,
    ) -> Result<bool, StorageError> {
        let tx = self.conn.transaction()?;
        let changed = tx.execute(
            "UPDATE ranking_questions SET question = ?1, order_index = ?2
             WHERE id = ?3 AND form_id = (SELECT id FROM forms WHERE id = ?4 AND owner_id = ?5)",
            params![text, order_index, id.0, form.0, owner_id],
        )?;
        if changed == 0 {
            return Ok(false);
        }
        {
            let mut stmt = tx.prepare_cached(
                "UPDATE ranking_options SET option = ?1, order_index = ?2
                 WHERE id = ?3 AND ranking_id = ?4",
            )?;
            for option in options {
                stmt.execute(params![option.text, option.order_index, option.id.0, id.0])?;
            }
        }
        tx.commit()?;
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Option add/remove
    // -----------------------------------------------------------------------

    fn insert_choice_option(
        &mut self,
        form: &FormId,
        owner_id: &str,
        question: QuestionId,
        text: &str,
        order_index: i64,
    ) -> Result<Option<ChoiceOption>, StorageError> {
        if !self.question_in_owned_form("choice_questions", question, form, owner_id)? {
            return Ok(None);
        }
        self.conn.execute(
            "INSERT INTO choice_options (choice_id, option, order_index) VALUES (?1, ?2, ?3)",
            params![question.0, text, order_index],
        )?;
        Ok(Some(ChoiceOption {
            id: OptionId(self.conn.last_insert_rowid()),
            text: text.to_string(),
            order_index,
        }))
    }

    fn delete_choice_option(
        &mut self,
        form: &FormId,
        owner_id: &str,
        option: OptionId,
    ) -> Result<bool, StorageError> {
        let changed = self.conn.execute(
            "DELETE FROM choice_options WHERE id = ?1 AND choice_id IN (
                 SELECT q.id FROM choice_questions q JOIN forms f ON f.id = q.form_id
                 WHERE f.id = ?2 AND f.owner_id = ?3
             )",
            params![option.0, form.0, owner_id],
        )?;
        Ok(changed == 1)
    }

    fn insert_ranking_option(
        &mut self,
        form: &FormId,
        owner_id: &str,
        question: QuestionId,
        text: &str,
        order_index: i64,
    ) -> Result<Option<RankOption>, StorageError> {
        if !self.question_in_owned_form("ranking_questions", question, form, owner_id)? {
            return Ok(None);
        }
        self.conn.execute(
            "INSERT INTO ranking_options (ranking_id, option, order_index) VALUES (?1, ?2, ?3)",
            params![question.0, text, order_index],
        )?;
        Ok(Some(RankOption {
            id: RankOptionId(self.conn.last_insert_rowid()),
            text: text.to_string(),
            order_index,
        }))
    }

    fn delete_ranking_option(
        &mut self,
        form: &FormId,
        owner_id: &str,
        option: RankOptionId,
    ) -> Result<bool, StorageError> {
        let changed = self.conn.execute(
            "DELETE FROM ranking_options WHERE id = ?1 AND ranking_id IN (
                 SELECT q.id FROM ranking_questions q JOIN forms f ON f.id = q.form_id
                 WHERE f.id = ?2 AND f.owner_id = ?3
             )",
            params![option.0, form.0, owner_id],
        )?;
        Ok(changed == 1)
    }

    // -----------------------------------------------------------------------
    // Cross-variant dispatch
    // -----------------------------------------------------------------------

    fn set_question_order(
        &mut self,
        form: &FormId,
        owner_id: &str,
        target: QuestionRef,
        order_index: i64,
    ) -> Result<bool, StorageError> {
        let sql = format!(
            "UPDATE {} SET order_index = ?1
             WHERE id = ?2 AND form_id = (SELECT id FROM forms WHERE id = ?3 AND owner_id = ?4)",
            Self::question_table(target.kind)
        );
        let changed = self
            .conn
            .execute(&sql, params![order_index, target.id.0, form.0, owner_id])?;
        Ok(changed == 1)
    }

    fn delete_question(
        &mut self,
        form: &FormId,
        owner_id: &str,
        target: QuestionRef,
    ) -> Result<bool, StorageError> {
        let sql = format!(
            "DELETE FROM {}
             WHERE id = ?1 AND form_id = (SELECT id FROM forms WHERE id = ?2 AND owner_id = ?3)",
            Self::question_table(target.kind)
        );
        let changed = self.conn.execute(&sql, params![target.id.0, form.0, owner_id])?;
        Ok(changed == 1)
    }

    fn lock_question(&mut self, target: QuestionRef) -> Result<(), StorageError> {
        let sql = format!(
            "UPDATE {} SET editable = 0 WHERE id = ?1",
            Self::question_table(target.kind)
        );
        self.conn.execute(&sql, params![target.id.0])?;
        Ok(())
    }

    fn record_answer(
        &mut self,
        form: &FormId,
        target: QuestionRef,
        answer: &Answer,
    ) -> Result<(), StorageError> {
        match (target.kind, answer) {
            (QuestionKind::Choice, Answer::Choice(option)) => {
                self.conn.execute(
                    "INSERT INTO choice_responses (id, form_id, choice_id, option_id)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![Uuid::new_v4().to_string(), form.0, target.id.0, option.0],
                )?;
            }
            (QuestionKind::Text, Answer::Text(text)) => {
                self.conn.execute(
                    "INSERT INTO text_responses (id, form_id, text_id, response)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![Uuid::new_v4().to_string(), form.0, target.id.0, text],
                )?;
            }
            (QuestionKind::Rating, Answer::Rating(value)) => {
                self.conn.execute(
                    "INSERT INTO rating_responses (id, form_id, rating_id, response)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![Uuid::new_v4().to_string(), form.0, target.id.0, value],
                )?;
            }
            (QuestionKind::Date, Answer::Date(date)) => {
                self.conn.execute(
                    "INSERT INTO date_responses (id, form_id, date_id, response)
                     VALUES (?1, ?2, ?3, ?4)",
                    params![Uuid::new_v4().to_string(), form.0, target.id.0, encode_date(date)],
                )?;
            }
            (QuestionKind::Ranking, Answer::Ranking(order)) => {
                let tx = self.conn.transaction()?;
                let response_id = Uuid::new_v4().to_string();
                tx.execute(
                    "INSERT INTO ranking_responses (id, form_id, ranking_id) VALUES (?1, ?2, ?3)",
                    params![response_id, form.0, target.id.0],
                )?;
                {
                    let mut stmt = tx.prepare_cached(
                        "INSERT INTO ranking_option_responses (response_id, position, option_id)
                         VALUES (?1, ?2, ?3)",
                    )?;
                    for (position, option) in order.iter().enumerate() {
                        stmt.execute(params![response_id, position as i64, option.0])?;
                    }
                }
                tx.commit()?;
            }
            (kind, _) => {
                return Err(StorageError::Integrity {
                    reason: format!("answer payload does not match question kind {kind}"),
                });
            }
        }
        Ok(())
    }

    fn response_count(&self, form: &FormId, target: QuestionRef) -> Result<i64, StorageError> {
        let (table, column) = Self::response_table(target.kind);
        let sql = format!("SELECT COUNT(*) FROM {table} WHERE form_id = ?1 AND {column} = ?2");
        let count: i64 =
            self.conn
                .query_row(&sql, params![form.0, target.id.0], |row| row.get(0))?;
        Ok(count)
    }
}
