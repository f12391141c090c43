//! The solve entry point: model, alpha sweep, aggregation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, info, info_span, warn};

use super::{AlphaLevelOptimizer, RorResult, SolveError};
use crate::domain::aggregation::{AggregatorKind, ResultAggregator};
use crate::domain::dataset::RorDataset;
use crate::domain::foundation::{SolveId, Timestamp};
use crate::domain::model::ConstraintBuilder;
use crate::domain::parameters::{ConfigurationError, RorParameters, MAX_NUMBER_OF_ALPHA_VALUES};
use crate::domain::tie_resolution::TieResolver;
use crate::ports::{LinearProgramSolver, ProcessingCallbackData, ProgressReporter};

/// Shared flag checked between alpha levels.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Runs complete solves against an LP backend.
///
/// A solve owns copies of its dataset and parameters, so concurrent solves
/// on one `RorSolver` never share mutable state.
#[derive(Clone)]
pub struct RorSolver {
    lp: Arc<dyn LinearProgramSolver>,
    max_alpha_values: usize,
}

impl RorSolver {
    pub fn new(lp: Arc<dyn LinearProgramSolver>) -> Self {
        Self {
            lp,
            max_alpha_values: MAX_NUMBER_OF_ALPHA_VALUES,
        }
    }

    /// Lowers the accepted NUMBER_OF_ALPHA_VALUES. Values above the built-in
    /// limit are ignored.
    pub fn with_max_alpha_values(mut self, max: usize) -> Self {
        self.max_alpha_values = max.min(MAX_NUMBER_OF_ALPHA_VALUES);
        self
    }

    /// Ranks the dataset's alternatives.
    ///
    /// `aggregator` replaces the RESULTS_AGGREGATOR parameter of this run.
    /// Progress is reported as 0.0 once the model is built, `(i + 1) / (n + 1)`
    /// after alpha level `i` of `n`, and 1.0 on success. Any failure is
    /// reported once with progress -1 and its cause before the error is
    /// returned.
    ///
    /// # Errors
    ///
    /// - `Configuration` for invalid parameters, before any LP is solved
    /// - `Data` if the dataset cannot be turned into a model
    /// - `Calculations` if an LP fails for some alpha level
    /// - `Aggregation` if the ranks cannot be aggregated
    /// - `Cancelled` if `cancel` was raised between alpha levels
    pub fn solve(
        &self,
        dataset: &RorDataset,
        parameters: &RorParameters,
        aggregator: AggregatorKind,
        progress: &dyn ProgressReporter,
        cancel: Option<&CancellationFlag>,
    ) -> Result<RorResult, SolveError> {
        let solve_id = SolveId::new();
        let span = info_span!(
            "ror_solve",
            solve_id = %solve_id,
            aggregator = %aggregator,
            backend = self.lp.name()
        );
        let _entered = span.enter();

        match self.run(solve_id, dataset, parameters, aggregator, progress, cancel) {
            Ok(result) => {
                progress.report(ProcessingCallbackData::new(1.0, "Finished"));
                info!(
                    final_rank = %result.final_rank(),
                    elapsed_ms = result
                        .finished_at
                        .duration_since(&result.started_at)
                        .num_milliseconds(),
                    "Solve finished"
                );
                Ok(result)
            }
            Err(err) => {
                warn!(error = %err, code = %err.code(), "Solve failed");
                progress.report(ProcessingCallbackData::failure(err.to_string()));
                Err(err)
            }
        }
    }

    fn run(
        &self,
        solve_id: SolveId,
        dataset: &RorDataset,
        parameters: &RorParameters,
        aggregator: AggregatorKind,
        progress: &dyn ProgressReporter,
        cancel: Option<&CancellationFlag>,
    ) -> Result<RorResult, SolveError> {
        let started_at = Timestamp::now();

        let mut parameters = parameters.clone();
        parameters.results_aggregator = aggregator;
        let result_aggregator = ResultAggregator::from_parameters(&parameters)?;
        if let Some(count) = parameters.number_of_alpha_values {
            if count > self.max_alpha_values {
                return Err(ConfigurationError::InvalidNumberOfAlphaValues {
                    min: 1,
                    max: self.max_alpha_values,
                    actual: count,
                }
                .into());
            }
        }
        let tie_resolver = TieResolver::new(parameters.tie_resolver);
        let alpha_values = parameters.effective_alpha_values();

        let model = ConstraintBuilder::new(parameters.eps, parameters.value_function)
            .build(dataset.clone())?;
        progress.report(ProcessingCallbackData::new(0.0, "Model built"));

        let optimizer = AlphaLevelOptimizer::new(self.lp.as_ref());
        let steps = (alpha_values.len() + 1) as f64;
        let mut intermediate_ranks = Vec::with_capacity(alpha_values.len());
        for (i, alpha) in alpha_values.iter().enumerate() {
            if cancel.is_some_and(CancellationFlag::is_cancelled) {
                debug!(alpha = %alpha, "Cancellation observed");
                return Err(SolveError::Cancelled);
            }
            intermediate_ranks.push(optimizer.optimize(&model, alpha)?);
            progress.report(ProcessingCallbackData::new(
                (i + 1) as f64 / steps,
                format!("Solved alpha {}", alpha),
            ));
        }

        let aggregation = result_aggregator.aggregate(
            model.dataset().alternatives(),
            &intermediate_ranks,
            tie_resolver,
        )?;

        Ok(RorResult {
            solve_id,
            aggregator,
            parameters,
            model,
            intermediate_ranks,
            aggregation,
            started_at,
            finished_at: Timestamp::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::GoodLpSolver;
    use crate::domain::dataset::{Criterion, Relation};
    use crate::domain::ranking::Rank;
    use crate::domain::tie_resolution::TieResolverKind;
    use std::sync::Mutex;

    fn dataset() -> RorDataset {
        RorDataset::builder()
            .criteria(vec![Criterion::gain("quality"), Criterion::cost("price")])
            .alternative("A", vec![9.0, 10.0])
            .alternative("B", vec![6.0, 20.0])
            .alternative("C", vec![3.0, 30.0])
            .build()
            .unwrap()
    }

    fn solver() -> RorSolver {
        RorSolver::new(Arc::new(GoodLpSolver::new()))
    }

    #[derive(Default)]
    struct Recorder(Mutex<Vec<ProcessingCallbackData>>);

    impl ProgressReporter for Recorder {
        fn report(&self, data: ProcessingCallbackData) {
            self.0.lock().unwrap().push(data);
        }
    }

    impl Recorder {
        fn progress(&self) -> Vec<f64> {
            self.0.lock().unwrap().iter().map(|d| d.progress).collect()
        }
    }

    #[test]
    fn reports_progress_per_alpha_level() {
        let recorder = Recorder::default();
        let result = solver()
            .solve(&dataset(), &RorParameters::default(), AggregatorKind::Default, &recorder, None)
            .unwrap();

        assert_eq!(recorder.progress(), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(result.intermediate_ranks.len(), 3);
        assert_eq!(result.final_rank(), &Rank::strict(["A", "B", "C"].map(String::from)));
    }

    #[test]
    fn aggregator_argument_overrides_parameters() {
        let parameters = RorParameters::builder()
            .aggregator(AggregatorKind::Copeland)
            .build()
            .unwrap();
        let result = solver()
            .solve(&dataset(), &parameters, AggregatorKind::Borda, &Recorder::default(), None)
            .unwrap();
        assert_eq!(result.aggregator, AggregatorKind::Borda);
        assert_eq!(result.parameters.results_aggregator, AggregatorKind::Borda);
        // caller's copy is untouched
        assert_eq!(parameters.results_aggregator, AggregatorKind::Copeland);
    }

    #[test]
    fn voting_aggregators_use_generated_alpha_values() {
        let parameters = RorParameters::builder()
            .number_of_alpha_values(5)
            .tie_resolver(TieResolverKind::Copeland)
            .build()
            .unwrap();
        let result = solver()
            .solve(&dataset(), &parameters, AggregatorKind::Borda, &Recorder::default(), None)
            .unwrap();
        let names: Vec<&str> = result
            .intermediate_ranks
            .iter()
            .map(|r| r.alpha_value.name())
            .collect();
        assert_eq!(names, vec!["alpha_1", "alpha_2", "alpha_3", "alpha_4", "alpha_5"]);
    }

    #[test]
    fn configured_limit_rejects_larger_alpha_counts_before_any_lp() {
        let parameters = RorParameters::builder()
            .aggregator(AggregatorKind::Borda)
            .number_of_alpha_values(5)
            .build()
            .unwrap();
        let recorder = Recorder::default();
        let err = solver()
            .with_max_alpha_values(4)
            .solve(&dataset(), &parameters, AggregatorKind::Borda, &recorder, None)
            .unwrap_err();

        assert_eq!(
            err,
            SolveError::Configuration(ConfigurationError::InvalidNumberOfAlphaValues {
                min: 1,
                max: 4,
                actual: 5
            })
        );
        assert_eq!(recorder.progress(), vec![-1.0]);

        let relaxed = solver().with_max_alpha_values(100);
        assert_eq!(relaxed.max_alpha_values, MAX_NUMBER_OF_ALPHA_VALUES);
    }

    #[test]
    fn cancellation_stops_before_the_next_alpha() {
        let flag = CancellationFlag::new();
        flag.cancel();
        let recorder = Recorder::default();
        let err = solver()
            .solve(&dataset(), &RorParameters::default(), AggregatorKind::Default, &recorder, Some(&flag))
            .unwrap_err();
        assert_eq!(err, SolveError::Cancelled);
        assert_eq!(recorder.progress(), vec![0.0, -1.0]);
    }

    #[test]
    fn contradictory_relations_fail_with_sentinel() {
        let dataset = RorDataset::builder()
            .criteria(vec![Criterion::gain("c1"), Criterion::gain("c2")])
            .alternative("A", vec![3.0, 3.0])
            .alternative("B", vec![2.0, 2.0])
            .preference("B", "A", Relation::Preference)
            .build()
            .unwrap();
        let recorder = Recorder::default();
        let err = solver()
            .solve(&dataset, &RorParameters::default(), AggregatorKind::Default, &recorder, None)
            .unwrap_err();
        assert!(matches!(err, SolveError::Calculations(_)));
        assert_eq!(recorder.progress().last(), Some(&-1.0));
    }
}
