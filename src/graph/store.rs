//! In-memory org chart storage
//!
//! The chart owns every employee node and keeps three views in step:
//! - employees: EmployeeId -> Employee (identifier index, source of truth)
//! - name_index: name -> [EmployeeId] (registered employees only)
//! - rootless: ids of employees without a manager
//!
//! Each node also carries `total_reports`, maintained incrementally by walking
//! the manager chain whenever a subtree is attached or detached.

use super::node::Employee;
use super::record::EmployeeRecord;
use super::types::{EmployeeId, Identity, ManagerUpdate};
use super::view::{Anomaly, ChartNode, ChartStatistics, EmployeeDetail};
use crate::index::NameIndex;
use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during org chart operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Employee {0} already exists")]
    DuplicateIdentifier(EmployeeId),

    #[error("Employee {0} is not registered")]
    UnknownIdentifier(EmployeeId),

    #[error("Organizational structure should not form a circle (at employee {0})")]
    CyclicStructure(EmployeeId),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type GraphResult<T> = Result<T, GraphError>;

/// In-memory org chart
///
/// Single writer: mutations take `&mut self`, queries take `&self`. Hosts that
/// share a chart across tasks wrap it in a read/write lock.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrgChart {
    /// Employee storage keyed by id, in registration order
    employees: IndexMap<EmployeeId, Employee>,

    /// Name lookups for registered employees
    name_index: NameIndex,

    /// Employees without a manager
    rootless: BTreeSet<EmployeeId>,
}

impl OrgChart {
    /// Create a new empty chart
    pub fn new() -> Self {
        OrgChart {
            employees: IndexMap::new(),
            name_index: NameIndex::new(),
            rootless: BTreeSet::new(),
        }
    }

    /// Insert an employee, or fill in a placeholder carrying the same id
    ///
    /// An unknown `manager` is created as a placeholder so that reports can be
    /// loaded before their managers.
    pub fn insert(
        &mut self,
        id: EmployeeId,
        name: &str,
        manager: Option<EmployeeId>,
    ) -> GraphResult<&Employee> {
        let id = id.validate()?;
        let manager = manager.map(EmployeeId::validate).transpose()?;
        if name.is_empty() {
            return Err(GraphError::InvalidInput(
                "employee name must not be empty".to_string(),
            ));
        }

        match self.employees.get(&id).map(Employee::is_placeholder) {
            Some(true) => return self.update(id, Some(name), ManagerUpdate::Set(manager)),
            Some(false) => return Err(GraphError::DuplicateIdentifier(id)),
            None => {}
        }
        if manager == Some(id) {
            return Err(GraphError::CyclicStructure(id));
        }

        self.employees.insert(id, Employee::new(id, name));
        self.name_index.insert(name, id);
        self.connect(id, manager)?;
        self.employee(id)
    }

    /// Insert from a raw record, rejecting malformed identifiers
    pub fn insert_record(&mut self, record: &EmployeeRecord) -> GraphResult<&Employee> {
        let id = EmployeeId::try_from(record.id)?;
        let manager = record.manager_id.map(EmployeeId::try_from).transpose()?;
        self.insert(id, &record.name, manager)
    }

    /// Insert a batch of records in order
    ///
    /// The batch is all-or-nothing: if any record fails, the chart is restored
    /// to its state before the call and the first error is returned.
    pub fn insert_many(&mut self, records: &[EmployeeRecord]) -> GraphResult<usize> {
        let snapshot = self.clone();
        for record in records {
            if let Err(err) = self.insert_record(record) {
                *self = snapshot;
                return Err(err);
            }
        }
        Ok(records.len())
    }

    /// Rename and/or reparent an existing employee
    ///
    /// The manager change is applied first. If it would form a cycle the
    /// employee stays under its previous manager, the rename is skipped, and
    /// `CyclicStructure` is returned.
    pub fn update(
        &mut self,
        id: EmployeeId,
        name: Option<&str>,
        manager: ManagerUpdate,
    ) -> GraphResult<&Employee> {
        let id = id.validate()?;
        let current_manager = self.employee(id)?.manager;

        if let ManagerUpdate::Set(new_manager) = manager {
            let new_manager = new_manager.map(EmployeeId::validate).transpose()?;
            if new_manager != current_manager {
                self.reparent(id, new_manager)?;
            }
        }

        if let Some(name) = name.filter(|name| !name.is_empty()) {
            self.rename(id, name);
        }

        self.employee(id)
    }

    /// Remove an employee, promoting its reports to its own manager
    pub fn delete(&mut self, id: EmployeeId) -> GraphResult<Employee> {
        let id = id.validate()?;
        let (manager, reports) = {
            let employee = self.employee(id)?;
            (employee.manager, employee.direct_reports.clone())
        };

        for report in &reports {
            self.disconnect(*report);
            self.connect(*report, manager)?;
        }
        if !reports.is_empty() {
            debug!(
                employee = %id,
                moved = reports.len(),
                "Moved direct reports to {:?}",
                manager
            );
        }

        self.disconnect(id);
        self.rootless.remove(&id);
        let removed = self
            .employees
            .shift_remove(&id)
            .ok_or(GraphError::UnknownIdentifier(id))?;
        if let Identity::Registered(name) = &removed.identity {
            self.name_index.remove(name, id);
        }
        Ok(removed)
    }

    /// Find every registered employee with the given name
    pub fn find_by_name(&self, name: &str) -> Vec<EmployeeDetail> {
        self.name_index
            .get(name)
            .iter()
            .filter_map(|id| self.detail(*id))
            .collect()
    }

    pub fn find_by_id(&self, id: EmployeeId) -> Option<EmployeeDetail> {
        self.detail(id)
    }

    /// Look up by name, plus the employee with that id when the query is numeric
    ///
    /// The id match comes first; name matches follow without repeating it.
    pub fn lookup(&self, query: &str) -> Vec<EmployeeDetail> {
        let query = query.trim();
        let mut found: Vec<EmployeeDetail> = query
            .parse::<u64>()
            .ok()
            .and_then(|raw| self.find_by_id(EmployeeId::new(raw)))
            .into_iter()
            .collect();
        for detail in self.find_by_name(query) {
            if !found.iter().any(|existing| existing.id == detail.id) {
                found.push(detail);
            }
        }
        found
    }

    /// Structural warnings: several roots, and roots with nobody under them
    pub fn check_anomalies(&self) -> Vec<Anomaly> {
        let mut anomalies = Vec::new();
        if self.rootless.len() > 1 {
            anomalies.push(Anomaly::MultipleRoots {
                count: self.rootless.len(),
            });
        }
        for id in &self.rootless {
            if let Some(employee) = self.employees.get(id) {
                if employee.is_root() && employee.direct_reports.is_empty() {
                    anomalies.push(Anomaly::Isolated {
                        id: *id,
                        name: employee.name().to_string(),
                    });
                }
            }
        }
        anomalies
    }

    /// Anomalies rendered as human-readable strings
    pub fn warnings(&self) -> Vec<String> {
        self.check_anomalies()
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Export every tree in pre-order, roots ordered by id
    pub fn export(&self) -> Vec<ChartNode> {
        let mut nodes = Vec::with_capacity(self.employees.len());
        let mut stack: Vec<(EmployeeId, usize)> =
            self.rootless.iter().rev().map(|id| (*id, 0)).collect();

        while let Some((id, level)) = stack.pop() {
            let Some(employee) = self.employees.get(&id) else {
                continue;
            };
            stack.extend(
                employee
                    .direct_reports
                    .iter()
                    .rev()
                    .map(|report| (*report, level + 1)),
            );
            nodes.push(ChartNode {
                id,
                name: match &employee.identity {
                    Identity::Placeholder => None,
                    Identity::Registered(name) => Some(name.clone()),
                },
                manager: employee.manager,
                level,
                total_reports: employee.total_reports,
                reports: employee.direct_reports.clone(),
            });
        }
        nodes
    }

    /// Drop every employee and index entry
    pub fn clear(&mut self) {
        self.employees.clear();
        self.name_index.clear();
        self.rootless.clear();
        debug!("Org chart reset");
    }

    pub fn get(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.get(&id)
    }

    pub fn contains(&self, id: EmployeeId) -> bool {
        self.employees.contains_key(&id)
    }

    /// Number of employees, placeholders included
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    /// All employees in registration order
    pub fn employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.values()
    }

    /// Ids of employees without a manager, ascending
    pub fn rootless(&self) -> impl Iterator<Item = EmployeeId> + '_ {
        self.rootless.iter().copied()
    }

    pub fn name_index(&self) -> &NameIndex {
        &self.name_index
    }

    pub fn statistics(&self) -> ChartStatistics {
        let mut max_depth = 0;
        let mut stack: Vec<(EmployeeId, usize)> =
            self.rootless.iter().map(|id| (*id, 1)).collect();
        while let Some((id, depth)) = stack.pop() {
            max_depth = max_depth.max(depth);
            if let Some(employee) = self.employees.get(&id) {
                stack.extend(employee.direct_reports.iter().map(|r| (*r, depth + 1)));
            }
        }

        ChartStatistics {
            employees: self.employees.len(),
            placeholders: self.employees.values().filter(|e| e.is_placeholder()).count(),
            roots: self.rootless.len(),
            distinct_names: self.name_index.len(),
            max_depth,
        }
    }

    fn employee(&self, id: EmployeeId) -> GraphResult<&Employee> {
        self.employees
            .get(&id)
            .ok_or(GraphError::UnknownIdentifier(id))
    }

    fn detail(&self, id: EmployeeId) -> Option<EmployeeDetail> {
        let employee = self.employees.get(&id)?;
        Some(EmployeeDetail {
            id,
            name: employee.name().to_string(),
            managers: self.manager_names(employee),
            direct_reports: employee.direct_report_count(),
            indirect_reports: employee.indirect_report_count(),
        })
    }

    /// Names up the manager chain, nearest first
    fn manager_names(&self, employee: &Employee) -> Vec<String> {
        let mut names = Vec::new();
        let mut cursor = employee.manager;
        while let Some(manager) = cursor.and_then(|id| self.employees.get(&id)) {
            names.push(manager.name().to_string());
            cursor = manager.manager;
        }
        names
    }

    fn create_placeholder(&mut self, id: EmployeeId) {
        self.employees.insert(id, Employee::placeholder(id));
        self.rootless.insert(id);
        debug!(employee = %id, "Created placeholder for unregistered manager");
    }

    fn rename(&mut self, id: EmployeeId, name: &str) {
        let Some(employee) = self.employees.get_mut(&id) else {
            return;
        };
        if employee.name() == name {
            return;
        }
        let previous =
            std::mem::replace(&mut employee.identity, Identity::Registered(name.to_string()));
        match previous {
            Identity::Registered(old) => self.name_index.remove(&old, id),
            Identity::Placeholder => debug!(employee = %id, name, "Placeholder registered"),
        }
        self.name_index.insert(name, id);
    }

    /// Move `id` under `new_manager`, restoring the old link on failure
    fn reparent(&mut self, id: EmployeeId, new_manager: Option<EmployeeId>) -> GraphResult<()> {
        let previous = self.disconnect(id);
        if let Err(err) = self.connect(id, new_manager) {
            if let Some((manager, position)) = previous {
                self.reattach(id, manager, position)?;
            }
            return Err(err);
        }
        Ok(())
    }

    /// Attach `id` to `manager` (or make it a root) and bump ancestor counters
    fn connect(&mut self, id: EmployeeId, manager: Option<EmployeeId>) -> GraphResult<()> {
        let Some(manager_id) = manager else {
            if let Some(employee) = self.employees.get_mut(&id) {
                employee.manager = None;
            }
            self.rootless.insert(id);
            return Ok(());
        };

        if !self.employees.contains_key(&manager_id) {
            self.create_placeholder(manager_id);
        }

        self.link(id, manager_id, None);
        let delta = self.employee(id)?.total_reports + 1;
        if let Err(err) = self.increment_ancestors(manager_id, delta) {
            self.unlink(id, manager_id);
            return Err(err);
        }
        Ok(())
    }

    /// Detach `id` from its manager, returning the manager and the slot it held
    fn disconnect(&mut self, id: EmployeeId) -> Option<(EmployeeId, usize)> {
        let employee = self.employees.get(&id)?;
        let manager_id = employee.manager?;
        let delta = employee.total_reports + 1;

        self.decrement_ancestors(manager_id, delta);
        self.unlink(id, manager_id)
            .map(|position| (manager_id, position))
    }

    /// Put `id` back into the exact slot it was disconnected from
    fn reattach(&mut self, id: EmployeeId, manager: EmployeeId, position: usize) -> GraphResult<()> {
        self.link(id, manager, Some(position));
        let delta = self.employee(id)?.total_reports + 1;
        self.increment_ancestors(manager, delta)
    }

    fn link(&mut self, id: EmployeeId, manager_id: EmployeeId, position: Option<usize>) {
        if let Some(manager) = self.employees.get_mut(&manager_id) {
            match position {
                Some(position) if position <= manager.direct_reports.len() => {
                    manager.direct_reports.insert(position, id)
                }
                _ => manager.direct_reports.push(id),
            }
        }
        if let Some(employee) = self.employees.get_mut(&id) {
            employee.manager = Some(manager_id);
        }
        self.rootless.remove(&id);
    }

    fn unlink(&mut self, id: EmployeeId, manager_id: EmployeeId) -> Option<usize> {
        let position = self.employees.get_mut(&manager_id).and_then(|manager| {
            let position = manager.report_position(id)?;
            manager.direct_reports.remove(position);
            Some(position)
        });
        if let Some(employee) = self.employees.get_mut(&id) {
            employee.manager = None;
        }
        self.rootless.insert(id);
        position
    }

    /// Add `delta` to `start` and each of its ancestors
    ///
    /// If the walk revisits a node the manager relation has a cycle: every
    /// counter touched by this walk is reverted and `CyclicStructure` returned.
    fn increment_ancestors(&mut self, start: EmployeeId, delta: usize) -> GraphResult<()> {
        let mut visited = FxHashSet::default();
        let mut applied = Vec::new();
        let mut cursor = Some(start);

        while let Some(id) = cursor {
            if !visited.insert(id) {
                for touched in applied.iter().rev() {
                    if let Some(employee) = self.employees.get_mut(touched) {
                        employee.total_reports -= delta;
                    }
                }
                return Err(GraphError::CyclicStructure(id));
            }
            let Some(employee) = self.employees.get_mut(&id) else {
                break;
            };
            employee.total_reports += delta;
            applied.push(id);
            cursor = employee.manager;
        }
        Ok(())
    }

    /// Subtract `delta` from `start` and each of its ancestors
    fn decrement_ancestors(&mut self, start: EmployeeId, delta: usize) {
        let mut cursor = Some(start);
        while let Some(employee) = cursor.and_then(|id| self.employees.get_mut(&id)) {
            employee.total_reports = employee.total_reports.saturating_sub(delta);
            cursor = employee.manager;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> EmployeeId {
        EmployeeId::new(raw)
    }

    fn chain(len: u64) -> OrgChart {
        // 1 <- 2 <- 3 <- ... <- len
        let mut chart = OrgChart::new();
        chart.insert(id(1), "e1", None).unwrap();
        for raw in 2..=len {
            chart
                .insert(id(raw), &format!("e{}", raw), Some(id(raw - 1)))
                .unwrap();
        }
        chart
    }

    #[test]
    fn test_insert_and_get() {
        let mut chart = OrgChart::new();
        let employee = chart.insert(id(1), "adam", None).unwrap();
        assert_eq!(employee.name(), "adam");
        assert!(employee.is_root());

        assert_eq!(chart.len(), 1);
        assert!(chart.contains(id(1)));
        assert_eq!(chart.rootless().collect::<Vec<_>>(), vec![id(1)]);
        assert_eq!(chart.name_index().get("adam"), &[id(1)]);
    }

    #[test]
    fn test_insert_rejects_invalid_input() {
        let mut chart = OrgChart::new();
        assert!(matches!(
            chart.insert(id(0), "zero", None),
            Err(GraphError::InvalidInput(_))
        ));
        assert!(matches!(
            chart.insert(id(1), "", None),
            Err(GraphError::InvalidInput(_))
        ));
        assert!(matches!(
            chart.insert(id(1), "adam", Some(id(0))),
            Err(GraphError::InvalidInput(_))
        ));
        assert!(chart.is_empty());
    }

    #[test]
    fn test_insert_record_rejects_negative_ids() {
        let mut chart = OrgChart::new();
        let result = chart.insert_record(&EmployeeRecord::new(-1, "adam", None));
        assert!(matches!(result, Err(GraphError::InvalidInput(_))));

        let result = chart.insert_record(&EmployeeRecord::new(1, "adam", Some(-5)));
        assert!(matches!(result, Err(GraphError::InvalidInput(_))));
        assert!(chart.is_empty());
    }

    #[test]
    fn test_self_manager_is_rejected_without_side_effects() {
        let mut chart = OrgChart::new();
        let result = chart.insert(id(5), "narcissus", Some(id(5)));
        assert_eq!(result.unwrap_err(), GraphError::CyclicStructure(id(5)));
        assert!(chart.is_empty());
        assert!(chart.name_index().is_empty());
    }

    #[test]
    fn test_duplicate_identifier() {
        let mut chart = OrgChart::new();
        chart.insert(id(1), "adam", None).unwrap();
        let result = chart.insert(id(1), "adam", None);
        assert_eq!(result.unwrap_err(), GraphError::DuplicateIdentifier(id(1)));
        assert_eq!(
            GraphError::DuplicateIdentifier(id(1)).to_string(),
            "Employee 1 already exists"
        );
    }

    #[test]
    fn test_connect_creates_placeholder_manager() {
        let mut chart = OrgChart::new();
        chart.insert(id(1), "adam", Some(id(99))).unwrap();

        let placeholder = chart.get(id(99)).unwrap();
        assert!(placeholder.is_placeholder());
        assert_eq!(placeholder.direct_reports, vec![id(1)]);
        assert_eq!(placeholder.total_reports, 1);
        assert_eq!(chart.rootless().collect::<Vec<_>>(), vec![id(99)]);
        assert_eq!(chart.name_index().len(), 1);
    }

    #[test]
    fn test_counters_along_chain() {
        let chart = chain(5);
        for raw in 1..=5 {
            assert_eq!(chart.get(id(raw)).unwrap().total_reports, (5 - raw) as usize);
        }
    }

    #[test]
    fn test_increment_ancestors_reverts_on_cycle() {
        let mut chart = chain(4);
        // Force a cycle by hand: 1 reports to 4
        chart.link(id(1), id(4), None);
        let before: Vec<usize> = chart.employees().map(|e| e.total_reports).collect();

        let result = chart.increment_ancestors(id(4), 7);
        assert!(matches!(result, Err(GraphError::CyclicStructure(_))));

        let after: Vec<usize> = chart.employees().map(|e| e.total_reports).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_connect_rolls_back_link_on_cycle() {
        let mut chart = chain(3);
        chart.disconnect(id(1));
        let result = chart.connect(id(1), Some(id(3)));
        assert!(matches!(result, Err(GraphError::CyclicStructure(_))));

        let root = chart.get(id(1)).unwrap();
        assert_eq!(root.manager, None);
        assert_eq!(root.total_reports, 2);
        assert!(chart.get(id(3)).unwrap().direct_reports.is_empty());
        assert_eq!(chart.get(id(3)).unwrap().total_reports, 0);
        assert!(chart.rootless().any(|r| r == id(1)));
    }

    #[test]
    fn test_disconnect_reports_slot() {
        let mut chart = OrgChart::new();
        chart.insert(id(1), "boss", None).unwrap();
        for raw in 2..=4 {
            chart.insert(id(raw), "report", Some(id(1))).unwrap();
        }
        assert_eq!(chart.disconnect(id(3)), Some((id(1), 1)));
        assert_eq!(chart.get(id(1)).unwrap().direct_reports, vec![id(2), id(4)]);
        assert_eq!(chart.get(id(1)).unwrap().total_reports, 2);
        assert_eq!(chart.disconnect(id(3)), None);
    }

    #[test]
    fn test_update_cycle_restores_previous_manager() {
        let mut chart = chain(4);
        chart.insert(id(10), "sibling", Some(id(1))).unwrap();
        let before = chart.clone();

        let result = chart.update(id(2), Some("renamed"), ManagerUpdate::Set(Some(id(4))));
        assert!(matches!(result, Err(GraphError::CyclicStructure(_))));
        assert_eq!(chart, before);
    }

    #[test]
    fn test_update_to_self_is_cyclic() {
        let mut chart = chain(2);
        let before = chart.clone();
        let result = chart.update(id(2), None, ManagerUpdate::Set(Some(id(2))));
        assert!(matches!(result, Err(GraphError::CyclicStructure(_))));
        assert_eq!(chart, before);
    }

    #[test]
    fn test_update_unknown_identifier() {
        let mut chart = OrgChart::new();
        let result = chart.update(id(7), Some("ghost"), ManagerUpdate::Unchanged);
        assert_eq!(result.unwrap_err(), GraphError::UnknownIdentifier(id(7)));
    }

    #[test]
    fn test_rename_moves_name_bucket() {
        let mut chart = OrgChart::new();
        chart.insert(id(1), "adam", None).unwrap();
        chart.update(id(1), Some("eve"), ManagerUpdate::Unchanged).unwrap();

        assert!(chart.find_by_name("adam").is_empty());
        assert_eq!(chart.find_by_name("eve").len(), 1);

        // Empty names leave the current one alone
        chart.update(id(1), Some(""), ManagerUpdate::Unchanged).unwrap();
        assert_eq!(chart.get(id(1)).unwrap().name(), "eve");
    }

    #[test]
    fn test_delete_promotes_reports() {
        let mut chart = chain(3);
        chart.insert(id(4), "e4", Some(id(2))).unwrap();

        let removed = chart.delete(id(2)).unwrap();
        assert_eq!(removed.id, id(2));
        assert!(!chart.contains(id(2)));

        let root = chart.get(id(1)).unwrap();
        assert_eq!(root.direct_reports, vec![id(3), id(4)]);
        assert_eq!(root.total_reports, 2);
        assert_eq!(chart.get(id(3)).unwrap().manager, Some(id(1)));
        assert!(chart.find_by_name("e2").is_empty());
    }

    #[test]
    fn test_delete_root_makes_reports_rootless() {
        let mut chart = chain(3);
        chart.delete(id(1)).unwrap();
        assert_eq!(chart.rootless().collect::<Vec<_>>(), vec![id(2)]);
        assert_eq!(chart.get(id(2)).unwrap().total_reports, 1);
    }

    #[test]
    fn test_lookup_by_id_then_name() {
        let mut chart = OrgChart::new();
        chart.insert(id(1), "adam", None).unwrap();
        chart.insert(id(2), "42", Some(id(1))).unwrap();

        assert_eq!(chart.lookup("1")[0].name, "adam");
        // No employee 42, so fall back to the name
        assert_eq!(chart.lookup("42")[0].id, id(2));
        assert_eq!(chart.lookup(" adam ")[0].id, id(1));
        assert!(chart.lookup("merlin").is_empty());
    }

    #[test]
    fn test_lookup_numeric_name_alongside_id() {
        let mut chart = OrgChart::new();
        chart.insert(id(1), "adam", None).unwrap();
        chart.insert(id(2), "1", Some(id(1))).unwrap();

        let found: Vec<_> = chart.lookup("1").into_iter().map(|d| d.id).collect();
        assert_eq!(found, vec![id(1), id(2)]);

        // An employee whose id and name agree is listed once
        chart.insert(id(3), "3", None).unwrap();
        assert_eq!(chart.lookup("3").len(), 1);
    }

    #[test]
    fn test_statistics() {
        let mut chart = chain(3);
        chart.insert(id(10), "e10", Some(id(50))).unwrap();

        let stats = chart.statistics();
        assert_eq!(stats.employees, 5);
        assert_eq!(stats.placeholders, 1);
        assert_eq!(stats.roots, 2);
        assert_eq!(stats.distinct_names, 4);
        assert_eq!(stats.max_depth, 3);

        assert_eq!(OrgChart::new().statistics(), ChartStatistics::default());
    }

    #[test]
    fn test_clear() {
        let mut chart = chain(3);
        chart.clear();
        assert!(chart.is_empty());
        assert!(chart.name_index().is_empty());
        assert_eq!(chart.rootless().count(), 0);
        assert_eq!(chart, OrgChart::new());
    }
}
