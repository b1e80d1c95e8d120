//! Session-scoped dashboard controller.
//!
//! Holds the active tab, the debounced filter session, and the rows last
//! shown. Failed refreshes and exports are reported through the view and
//! leave both the applied criteria and the displayed rows as they were.

use std::sync::Arc;
use std::time::Instant;

use chrono::{NaiveDate, NaiveDateTime};

use crate::errors::Result;
use crate::export::{ExportPayload, ExportScope};
use crate::filters::{Column, DateRange, FilterCriteria};
use crate::goals::{GoalActivityRecord, GoalStatusRecord};
use crate::reports::GoalReportServiceTrait;
use crate::session::FilterSession;
use crate::utils::time_utils::default_date_range;

use super::presentation_traits::{ReportTab, ReportView};

/// Rows currently on screen.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DisplayedRows {
    #[default]
    Nothing,
    Status(Vec<GoalStatusRecord>),
    Activity(Vec<GoalActivityRecord>),
}

impl DisplayedRows {
    pub fn len(&self) -> usize {
        match self {
            DisplayedRows::Nothing => 0,
            DisplayedRows::Status(rows) => rows.len(),
            DisplayedRows::Activity(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub struct Dashboard<V: ReportView> {
    service: Arc<dyn GoalReportServiceTrait>,
    view: V,
    session: FilterSession,
    tab: ReportTab,
    displayed: DisplayedRows,
}

impl<V: ReportView> Dashboard<V> {
    /// Starts a session on the status tab with the default date range ending
    /// `today`. Nothing is rendered until [`Dashboard::refresh`].
    pub fn new(service: Arc<dyn GoalReportServiceTrait>, view: V, today: NaiveDate) -> Self {
        let initial = FilterCriteria::with_date_range(default_date_range(today));
        Self::with_session(service, view, FilterSession::new(initial))
    }

    pub fn with_session(
        service: Arc<dyn GoalReportServiceTrait>,
        view: V,
        session: FilterSession,
    ) -> Self {
        Self {
            service,
            view,
            session,
            tab: ReportTab::default(),
            displayed: DisplayedRows::Nothing,
        }
    }

    pub fn tab(&self) -> ReportTab {
        self.tab
    }

    pub fn session(&self) -> &FilterSession {
        &self.session
    }

    pub fn displayed(&self) -> &DisplayedRows {
        &self.displayed
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Re-renders the active tab with the applied criteria.
    pub fn refresh(&mut self) -> Result<()> {
        let criteria = self.session.applied().clone();
        self.render(&criteria)
    }

    pub fn set_keyword(&mut self, keyword: impl Into<String>, now: Instant) {
        let keyword = keyword.into();
        self.session.edit(now, |criteria| criteria.keyword = keyword);
    }

    pub fn set_statuses(&mut self, statuses: Vec<String>, now: Instant) {
        self.session.edit(now, |criteria| criteria.statuses = statuses);
    }

    pub fn set_date_range(&mut self, range: Option<DateRange>, now: Instant) {
        self.session.edit(now, |criteria| criteria.date_range = range);
    }

    /// Sets or, with empty text, clears a per-column filter.
    pub fn set_column_filter(&mut self, column: Column, text: impl Into<String>, now: Instant) {
        let text = text.into();
        self.session.edit(now, |criteria| {
            if text.is_empty() {
                criteria.column_filters.remove(&column);
            } else {
                criteria.column_filters.insert(column, text);
            }
        });
    }

    /// Switches tab and renders it straight away with the applied criteria.
    pub fn switch_tab(&mut self, tab: ReportTab) -> Result<()> {
        if tab == self.tab {
            return Ok(());
        }
        let previous = self.tab;
        self.tab = tab;
        if let Err(err) = self.refresh() {
            self.tab = previous;
            return Err(err);
        }
        Ok(())
    }

    /// Applies pending input once the quiescence window has elapsed.
    /// Returns true when the table was re-rendered.
    pub fn tick(&mut self, now: Instant) -> Result<bool> {
        match self.session.deadline() {
            Some(due) if now >= due => self.commit_pending(),
            _ => Ok(false),
        }
    }

    /// Applies any pending input, then exports the active tab and offers the
    /// payload for download under a name stamped with `timestamp`.
    pub fn export(&mut self, scope: ExportScope, timestamp: NaiveDateTime) -> Result<ExportPayload> {
        self.commit_pending()?;
        let criteria = self.session.applied();
        let exported = match self.tab {
            ReportTab::Status => self.service.export_status(criteria, scope),
            ReportTab::Activity => self.service.export_activity(criteria, scope),
        };
        let payload = match exported {
            Ok(payload) => payload,
            Err(err) => {
                self.view.show_error(&err.to_string());
                return Err(err);
            }
        };
        let file_name = payload.file_name(timestamp);
        if let Err(err) = self.view.offer_download(&file_name, &payload) {
            self.view.show_error(&err.to_string());
            return Err(err);
        }
        self.view.clear_error();
        Ok(payload)
    }

    fn commit_pending(&mut self) -> Result<bool> {
        if !self.session.is_pending() {
            return Ok(false);
        }
        let candidate = self.session.current().clone();
        match self.render(&candidate) {
            Ok(()) => {
                self.session.flush();
                Ok(true)
            }
            Err(err) => {
                self.session.discard_pending();
                Err(err)
            }
        }
    }

    fn render(&mut self, criteria: &FilterCriteria) -> Result<()> {
        let rows = match self.tab {
            ReportTab::Status => self.service.status_report(criteria).map(DisplayedRows::Status),
            ReportTab::Activity => self
                .service
                .activity_report(criteria)
                .map(DisplayedRows::Activity),
        };
        match rows {
            Ok(rows) => {
                match &rows {
                    DisplayedRows::Status(records) => self.view.render_status_table(records),
                    DisplayedRows::Activity(records) => self.view.render_activity_table(records),
                    DisplayedRows::Nothing => {}
                }
                self.view.clear_error();
                self.displayed = rows;
                Ok(())
            }
            Err(err) => {
                log::warn!("Dashboard refresh failed: {}", err);
                self.view.show_error(&err.to_string());
                Err(err)
            }
        }
    }
}
