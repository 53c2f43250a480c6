//! Loading and saving budget plan files

use std::path::Path;

use crate::error::{BudgieError, BudgieResult};
use crate::models::BudgetPlan;

use super::file_io::{read_required, write_json_atomic};

/// Load and validate a plan from a JSON or YAML file
pub fn load_plan(path: &Path) -> BudgieResult<BudgetPlan> {
    let plan: BudgetPlan = read_required(path)?;

    plan.validate().map_err(|problems| {
        BudgieError::Validation(format!(
            "{} has invalid entries: {}",
            path.display(),
            problems.join("; ")
        ))
    })?;

    Ok(plan)
}

/// Write a plan, refusing to overwrite an existing file unless `force`
pub fn save_plan(path: &Path, plan: &BudgetPlan, force: bool) -> BudgieResult<()> {
    if path.exists() && !force {
        return Err(BudgieError::Storage(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    write_json_atomic(path, plan)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use tempfile::TempDir;

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plan.json");

        let plan = BudgetPlan::starter();
        save_plan(&path, &plan, false).unwrap();
        assert_eq!(load_plan(&path).unwrap(), plan);
    }

    #[test]
    fn test_save_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plan.yaml");

        save_plan(&path, &BudgetPlan::starter(), false).unwrap();
        assert!(save_plan(&path, &BudgetPlan::default(), false).is_err());
        save_plan(&path, &BudgetPlan::default(), true).unwrap();
        assert!(load_plan(&path).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_plan_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plan.json");

        let mut plan = BudgetPlan::starter();
        plan.goals[1].already_saved = Money::from_cents(-1);
        save_plan(&path, &plan, false).unwrap();

        let err = load_plan(&path).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("Vacation"));
    }
}
