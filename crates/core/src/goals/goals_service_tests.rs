#[cfg(test)]
mod tests {
    use crate::errors::{Error, Result};
    use crate::goals::goals_model::{Goal, GoalUpdate, NewGoal};
    use crate::goals::{GoalRepositoryTrait, GoalService, GoalServiceTrait};
    use async_trait::async_trait;
    use rust_decimal_macros::dec;
    use std::sync::{Arc, Mutex};

    // --- Mock GoalRepository ---
    struct MockGoalRepository {
        goals: Arc<Mutex<Vec<Goal>>>,
    }

    impl MockGoalRepository {
        fn with_goals(goals: Vec<Goal>) -> Arc<Self> {
            Arc::new(Self {
                goals: Arc::new(Mutex::new(goals)),
            })
        }
    }

    #[async_trait]
    impl GoalRepositoryTrait for MockGoalRepository {
        fn load_goals(&self, _user_id: &str) -> Result<Vec<Goal>> {
            Ok(self.goals.lock().unwrap().clone())
        }

        fn count_goals(&self, _user_id: &str) -> Result<i64> {
            Ok(self.goals.lock().unwrap().len() as i64)
        }

        async fn insert_goal(&self, _user_id: &str, new_goal: NewGoal) -> Result<Goal> {
            let goal = Goal {
                id: new_goal.id.unwrap_or_else(|| "generated".to_string()),
                name: new_goal.name,
                amount: new_goal.amount,
            };
            self.goals.lock().unwrap().push(goal.clone());
            Ok(goal)
        }

        async fn update_goal(&self, _user_id: &str, update: GoalUpdate) -> Result<Goal> {
            let mut goals = self.goals.lock().unwrap();
            let goal = goals
                .iter_mut()
                .find(|g| g.id == update.id)
                .ok_or_else(|| Error::Unexpected("goal not found".to_string()))?;
            goal.name = update.name;
            goal.amount = update.amount;
            Ok(goal.clone())
        }

        async fn delete_goal(&self, _user_id: &str, goal_id: &str) -> Result<usize> {
            let mut goals = self.goals.lock().unwrap();
            // Per the trait contract the guard is atomic with the delete.
            if goals.len() <= 1 && goals.iter().any(|g| g.id == goal_id) {
                return Err(Error::ConstraintViolation(
                    "A savings plan must keep at least one goal".to_string(),
                ));
            }
            let before = goals.len();
            goals.retain(|g| g.id != goal_id);
            Ok(before - goals.len())
        }

        async fn replace_goals(&self, _user_id: &str, new_goals: Vec<NewGoal>) -> Result<Vec<Goal>> {
            let replaced: Vec<Goal> = new_goals
                .into_iter()
                .enumerate()
                .map(|(i, g)| Goal {
                    id: g.id.unwrap_or_else(|| format!("g{}", i)),
                    name: g.name,
                    amount: g.amount,
                })
                .collect();
            *self.goals.lock().unwrap() = replaced.clone();
            Ok(replaced)
        }
    }

    fn goal(id: &str, name: &str, amount: rust_decimal::Decimal) -> Goal {
        Goal {
            id: id.to_string(),
            name: name.to_string(),
            amount,
        }
    }

    #[tokio::test]
    async fn total_is_sum_of_goal_amounts() {
        let repo = MockGoalRepository::with_goals(vec![
            goal("land", "Land Purchase", dec!(750_000)),
            goal("foundation", "Foundation", dec!(500_000)),
        ]);
        let service = GoalService::new(repo);

        assert_eq!(service.total("u1").unwrap(), dec!(1_250_000));
    }

    #[tokio::test]
    async fn total_tracks_every_mutation() {
        let repo = MockGoalRepository::with_goals(vec![goal("land", "Land", dec!(750_000))]);
        let service = GoalService::new(repo);

        service
            .add_goal(
                "u1",
                NewGoal {
                    id: Some("roof".to_string()),
                    name: "Roofing".to_string(),
                    amount: dec!(400_000),
                },
            )
            .await
            .unwrap();
        assert_eq!(service.total("u1").unwrap(), dec!(1_150_000));

        service
            .update_goal(
                "u1",
                GoalUpdate {
                    id: "roof".to_string(),
                    name: "Roofing".to_string(),
                    amount: dec!(450_000),
                },
            )
            .await
            .unwrap();
        assert_eq!(service.total("u1").unwrap(), dec!(1_200_000));

        service.remove_goal("u1", "roof").await.unwrap();
        assert_eq!(service.total("u1").unwrap(), dec!(750_000));
    }

    #[tokio::test]
    async fn add_goal_rejects_non_positive_amount() {
        let repo = MockGoalRepository::with_goals(vec![]);
        let service = GoalService::new(repo);

        let result = service
            .add_goal(
                "u1",
                NewGoal {
                    id: None,
                    name: "Fence".to_string(),
                    amount: dec!(0),
                },
            )
            .await;
        assert!(matches!(result, Err(Error::Validation(_))));
    }

    #[tokio::test]
    async fn removing_last_goal_is_blocked_and_ledger_unchanged() {
        let repo = MockGoalRepository::with_goals(vec![goal("land", "Land", dec!(750_000))]);
        let service = GoalService::new(repo);

        let result = service.remove_goal("u1", "land").await;
        assert!(matches!(result, Err(Error::ConstraintViolation(_))));
        assert_eq!(service.get_goals("u1").unwrap().len(), 1);
    }

    #[tokio::test]
    async fn apply_template_replaces_whole_ledger() {
        let repo = MockGoalRepository::with_goals(vec![goal("old", "Old", dec!(100_000))]);
        let service = GoalService::new(repo);

        let replaced = service
            .apply_template(
                "u1",
                vec![
                    NewGoal {
                        id: Some("land".to_string()),
                        name: "Land Purchase".to_string(),
                        amount: dec!(750_000),
                    },
                    NewGoal {
                        id: Some("structure".to_string()),
                        name: "Structure to Roof".to_string(),
                        amount: dec!(850_000),
                    },
                ],
            )
            .await
            .unwrap();

        assert_eq!(replaced.len(), 2);
        assert_eq!(service.total("u1").unwrap(), dec!(1_600_000));
    }

    #[tokio::test]
    async fn apply_template_rejects_empty_and_invalid_templates() {
        let repo = MockGoalRepository::with_goals(vec![goal("old", "Old", dec!(100_000))]);
        let service = GoalService::new(repo);

        assert!(matches!(
            service.apply_template("u1", vec![]).await,
            Err(Error::Validation(_))
        ));
        assert!(matches!(
            service
                .apply_template(
                    "u1",
                    vec![NewGoal {
                        id: None,
                        name: "  ".to_string(),
                        amount: dec!(10_000),
                    }]
                )
                .await,
            Err(Error::Validation(_))
        ));
        // Failed templates leave the ledger untouched.
        assert_eq!(service.total("u1").unwrap(), dec!(100_000));
    }
}
