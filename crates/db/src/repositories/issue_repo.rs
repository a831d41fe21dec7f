//! Repository for the `issues` table.
//!
//! All writes go through [`IssueRepo::create`] or [`IssueRepo::update`], which
//! run the lifecycle rule before the row is written so `opened_at`,
//! `previous_state` and `resolution_duration` are never set by callers.

use sqlx::PgPool;
use tracker_core::issue_state::IssueState;
use tracker_core::lifecycle::{apply_transition, IssueLifecycle};
use tracker_core::stats::DurationAggregates;
use tracker_core::types::{DbId, Timestamp};

use crate::models::issue::{CreateIssue, Issue, IssueDetail, IssueSummary, UpdateIssue};

/// Column list for `issues` queries.
const COLUMNS: &str = "id, title, description, submitter_id, assignee_id, category_id, \
    state, previous_state, opened_at, resolution_duration, created_at, updated_at";

/// Joins shared by the summary and detail projections.
const DISPLAY_JOINS: &str = "\
    FROM issues i \
    JOIN users s ON s.id = i.submitter_id \
    JOIN users a ON a.id = i.assignee_id \
    JOIN categories c ON c.id = i.category_id";

/// Provides lifecycle-aware writes, read projections and aggregates for issues.
pub struct IssueRepo;

impl IssueRepo {
    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Insert a new issue saved at `now`.
    ///
    /// An issue created open starts its clock at `now`; one created closed
    /// records a zero resolution duration.
    pub async fn create(
        pool: &PgPool,
        input: &CreateIssue,
        now: Timestamp,
    ) -> Result<Issue, sqlx::Error> {
        let lifecycle = apply_transition(IssueLifecycle::unsaved(input.state), now);

        let query = format!(
            "INSERT INTO issues \
                (title, description, submitter_id, assignee_id, category_id, \
                 state, previous_state, opened_at, resolution_duration) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        let issue = sqlx::query_as::<_, Issue>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.submitter_id)
            .bind(input.assignee_id)
            .bind(input.category_id)
            .bind(lifecycle.state.code())
            .bind(lifecycle.previous_state.code())
            .bind(lifecycle.opened_at.unwrap_or(now))
            .bind(lifecycle.resolution_duration)
            .fetch_one(pool)
            .await?;

        tracing::debug!(
            issue_id = issue.id,
            state = %issue.state,
            resolution_duration = issue.resolution_duration,
            "Issue created"
        );
        Ok(issue)
    }

    /// Apply `input` to an existing issue and save it at `now`.
    ///
    /// Only non-`None` fields are changed. Returns `None` if no row with the
    /// given `id` exists. The read and write share one transaction.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateIssue,
        now: Timestamp,
    ) -> Result<Option<Issue>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let select = format!("SELECT {COLUMNS} FROM issues WHERE id = $1");
        let Some(current) = sqlx::query_as::<_, Issue>(&select)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let mut lifecycle = current.lifecycle();
        if let Some(state) = input.state {
            lifecycle.state = state;
        }
        let lifecycle = apply_transition(lifecycle, now);

        if current.state != lifecycle.state {
            tracing::debug!(
                issue_id = id,
                from = %current.state,
                to = %lifecycle.state,
                resolution_duration = lifecycle.resolution_duration,
                "Issue state transition"
            );
        }

        let update = format!(
            "UPDATE issues SET \
                title = COALESCE($2, title), \
                description = COALESCE($3, description), \
                submitter_id = COALESCE($4, submitter_id), \
                assignee_id = COALESCE($5, assignee_id), \
                category_id = COALESCE($6, category_id), \
                state = $7, \
                previous_state = $8, \
                opened_at = $9, \
                resolution_duration = $10 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let issue = sqlx::query_as::<_, Issue>(&update)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.submitter_id)
            .bind(input.assignee_id)
            .bind(input.category_id)
            .bind(lifecycle.state.code())
            .bind(lifecycle.previous_state.code())
            .bind(lifecycle.opened_at.unwrap_or(current.opened_at))
            .bind(lifecycle.resolution_duration)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(issue))
    }

    /// Hard-delete an issue. Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM issues WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Find the full row for an issue.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Issue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM issues WHERE id = $1");
        sqlx::query_as::<_, Issue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every issue as a summary, in primary-key order.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<IssueSummary>, sqlx::Error> {
        let query = format!(
            "SELECT i.id, i.title, s.username AS submitter, a.username AS assignee, \
                    i.state, c.name AS category, i.opened_at \
             {DISPLAY_JOINS} \
             ORDER BY i.id"
        );
        sqlx::query_as::<_, IssueSummary>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find the detail projection of a single issue.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<IssueDetail>, sqlx::Error> {
        let query = format!(
            "SELECT i.id, i.title, i.description, s.username AS submitter, \
                    a.username AS assignee, i.state, c.name AS category, i.opened_at \
             {DISPLAY_JOINS} \
             WHERE i.id = $1"
        );
        sqlx::query_as::<_, IssueDetail>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    // -----------------------------------------------------------------------
    // Aggregates
    // -----------------------------------------------------------------------

    /// Count issues currently in `state`.
    pub async fn count_by_state(pool: &PgPool, state: IssueState) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM issues WHERE state = $1")
            .bind(state.code())
            .fetch_one(pool)
            .await?;
        Ok(count)
    }

    /// Min, max and average resolution duration over closed issues.
    ///
    /// All three are `None` when no issue is closed.
    pub async fn closed_duration_stats(pool: &PgPool) -> Result<DurationAggregates, sqlx::Error> {
        let (min, max, avg): (Option<i64>, Option<i64>, Option<f64>) = sqlx::query_as(
            "SELECT MIN(resolution_duration), MAX(resolution_duration), \
                    AVG(resolution_duration)::FLOAT8 \
             FROM issues WHERE state = $1",
        )
        .bind(IssueState::Closed.code())
        .fetch_one(pool)
        .await?;

        Ok(DurationAggregates { min, max, avg })
    }
}
