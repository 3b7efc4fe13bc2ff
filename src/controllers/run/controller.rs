use crate::controllers::run::data::frame_data::FrameData;
use crate::controllers::run::errors::ControllerError;
use crate::controllers::run::events::run_event::{RunEvent, RunOutcome};
use crate::controllers::run::ports::presenter::RunControllerPresenterPort;
use crate::controllers::run::settings::{MAX_SEQUENCE_SIZE, RunSettings};
use crate::core::actions::cancellation::sleep_cancelable;
use crate::core::actions::generate_sequence::generate_sequence::generate_sequence;
use crate::core::actions::sort::factory::sort_algorithm_factory;
use crate::core::actions::sort::ports::sort_algorithm::SortAlgorithm;
use crate::core::data::frame::Frame;
use crate::core::data::highlight::Highlight;
use log::{debug, info, trace, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    Started { generation: u64 },
    AlreadyRunning { generation: u64 },
}

struct ActiveRun {
    generation: u64,
    cancel: Arc<AtomicBool>,
    worker: JoinHandle<Vec<u32>>,
}

/// Owns the sequence and drives at most one sort worker at a time.
///
/// The sequence lives here between runs. `start` moves it into a worker
/// thread; it comes back when the run is stopped or found finished.
pub struct RunController {
    settings: RunSettings,
    presenter_port: Arc<dyn RunControllerPresenterPort>,
    rng: StdRng,
    sequence: Option<Vec<u32>>,
    active: Option<ActiveRun>,
    generation: u64,
}

impl RunController {
    pub fn new(settings: RunSettings, presenter_port: Arc<dyn RunControllerPresenterPort>) -> Self {
        Self {
            rng: Self::rng_for(&settings),
            settings,
            presenter_port,
            sequence: None,
            active: None,
            generation: 0,
        }
    }

    fn rng_for(settings: &RunSettings) -> StdRng {
        match settings.seed() {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    #[must_use]
    pub fn settings(&self) -> &RunSettings {
        &self.settings
    }

    /// Replaces the settings used by the next `create` and `start`.
    pub fn set_settings(&mut self, settings: RunSettings) {
        if settings.seed() != self.settings.seed() {
            self.rng = Self::rng_for(&settings);
        }
        self.settings = settings;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|run| !run.worker.is_finished())
    }

    /// Generation of the most recently started run, 0 before the first.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current sequence, or `None` while a run holds it or after `reset`.
    pub fn sequence(&mut self) -> Option<&[u32]> {
        self.reap_finished();
        self.sequence.as_deref()
    }

    /// Stops any active run and replaces the sequence with a fresh one.
    pub fn create(&mut self) -> Result<&[u32], ControllerError> {
        self.stop();

        let values = generate_sequence(
            self.settings.size(),
            self.settings.value_range(),
            self.settings.sampling(),
            MAX_SEQUENCE_SIZE,
            &mut self.rng,
        )?;

        debug!("created sequence of {} values", values.len());
        self.present_idle(&values);

        Ok(self.sequence.insert(values).as_slice())
    }

    /// Starts sorting the current sequence on a worker thread.
    ///
    /// A second `start` while a run is active does nothing.
    pub fn start(&mut self) -> Result<StartOutcome, ControllerError> {
        self.reap_finished();

        if let Some(run) = &self.active {
            debug!("start ignored, generation {} still running", run.generation);
            return Ok(StartOutcome::AlreadyRunning {
                generation: run.generation,
            });
        }

        let mut values = self.sequence.take().ok_or(ControllerError::NoSequence)?;

        self.generation += 1;
        let generation = self.generation;
        let cancel = Arc::new(AtomicBool::new(false));
        let worker_cancel = Arc::clone(&cancel);
        let presenter_port = Arc::clone(&self.presenter_port);
        let algorithm = sort_algorithm_factory(self.settings.algorithm());
        let delay = self.settings.delay();

        info!(
            "starting {} sort of {} values (generation {})",
            algorithm.display_name(),
            values.len(),
            generation
        );

        let worker = thread::spawn(move || {
            Self::run_worker(
                generation,
                algorithm.as_ref(),
                &mut values,
                delay,
                &worker_cancel,
                presenter_port.as_ref(),
            );
            values
        });

        self.active = Some(ActiveRun {
            generation,
            cancel,
            worker,
        });

        Ok(StartOutcome::Started { generation })
    }

    /// Cancels the active run, waits for the worker and redraws the sequence idle.
    pub fn stop(&mut self) {
        let Some(run) = self.active.take() else {
            return;
        };

        info!("stopping generation {}", run.generation);
        run.cancel.store(true, Ordering::Release);
        self.join_run(run);

        if let Some(values) = &self.sequence {
            self.present_idle(values);
        }
    }

    /// Stops any active run and discards the sequence.
    pub fn reset(&mut self) {
        self.stop();
        self.sequence = None;
        self.presenter_port.present(RunEvent::Cleared);
        debug!("sequence cleared");
    }

    /// Blocks until the active run ends on its own and recovers the sequence.
    pub fn wait(&mut self) {
        if let Some(run) = self.active.take() {
            debug!("waiting for generation {}", run.generation);
            self.join_run(run);
        }
    }

    /// Cancels and joins the active run without presenting anything.
    pub fn shutdown(&mut self) {
        if let Some(run) = self.active.take() {
            run.cancel.store(true, Ordering::Release);
            self.join_run(run);
        }
    }

    fn reap_finished(&mut self) {
        if self
            .active
            .as_ref()
            .is_some_and(|run| run.worker.is_finished())
        {
            if let Some(run) = self.active.take() {
                self.join_run(run);
            }
        }
    }

    fn join_run(&mut self, run: ActiveRun) {
        match run.worker.join() {
            Ok(values) => self.sequence = Some(values),
            Err(_) => warn!(
                "sort worker for generation {} panicked, sequence lost",
                run.generation
            ),
        }
    }

    fn present_idle(&self, values: &[u32]) {
        self.presenter_port.present(RunEvent::Frame(FrameData {
            generation: self.generation,
            frame: Frame::idle(values),
        }));
    }

    fn run_worker(
        generation: u64,
        algorithm: &dyn SortAlgorithm,
        values: &mut [u32],
        delay: Duration,
        cancel: &AtomicBool,
        presenter_port: &dyn RunControllerPresenterPort,
    ) {
        let cancel_token = || cancel.load(Ordering::Acquire);
        let mut frames: u64 = 0;

        let mut emitter = |values: &[u32], highlight: Highlight| {
            frames += 1;
            trace!("generation {} frame {} {:?}", generation, frames, highlight);

            presenter_port.present(RunEvent::Frame(FrameData {
                generation,
                frame: Frame::new(values.to_vec(), highlight, delay),
            }));

            // A cancel during the pause is picked up by the engine's next checkpoint.
            let _ = sleep_cancelable(delay, &cancel_token);
        };

        let outcome = match algorithm.sort(values, &mut emitter, &cancel_token) {
            Ok(()) => RunOutcome::Completed,
            Err(_) => RunOutcome::Cancelled,
        };

        info!(
            "generation {} finished: {:?} after {} frames",
            generation, outcome, frames
        );

        presenter_port.present(RunEvent::Finished {
            generation,
            outcome,
            frames,
        });
    }
}

impl Drop for RunController {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::sort::algorithms::bubble::bubble_sort_frame_count;
    use crate::core::actions::sort::kinds::SortAlgorithmKinds;
    use std::sync::Mutex;
    use std::time::Instant;

    #[derive(Default)]
    struct MockPresenterPort {
        events: Mutex<Vec<RunEvent>>,
    }

    impl MockPresenterPort {
        fn take_events(&self) -> Vec<RunEvent> {
            let mut guard = self.events.lock().unwrap();
            std::mem::take(&mut *guard)
        }

        fn snapshot(&self) -> Vec<RunEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl RunControllerPresenterPort for MockPresenterPort {
        fn present(&self, event: RunEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    fn controller_with(settings: RunSettings) -> (RunController, Arc<MockPresenterPort>) {
        let presenter_port = Arc::new(MockPresenterPort::default());
        let controller = RunController::new(
            settings,
            Arc::clone(&presenter_port) as Arc<dyn RunControllerPresenterPort>,
        );
        (controller, presenter_port)
    }

    fn fast_settings(size: usize, algorithm: SortAlgorithmKinds) -> RunSettings {
        RunSettings::new(size, Duration::ZERO)
            .unwrap()
            .with_algorithm(algorithm)
            .with_seed(Some(7))
    }

    fn wait_until<F: Fn(&[RunEvent]) -> bool>(
        port: &MockPresenterPort,
        timeout: Duration,
        predicate: F,
    ) -> Vec<RunEvent> {
        let start = Instant::now();
        loop {
            let events = port.snapshot();
            if predicate(&events) || start.elapsed() >= timeout {
                return events;
            }
            thread::sleep(Duration::from_millis(5));
        }
    }

    fn finished(events: &[RunEvent]) -> Option<(u64, RunOutcome, u64)> {
        events.iter().find_map(|e| match e {
            RunEvent::Finished {
                generation,
                outcome,
                frames,
            } => Some((*generation, *outcome, *frames)),
            _ => None,
        })
    }

    fn frame_count(events: &[RunEvent]) -> usize {
        events
            .iter()
            .filter(|e| matches!(e, RunEvent::Frame(_)))
            .count()
    }

    #[test]
    fn create_presents_idle_frame_of_requested_size() {
        let (mut controller, port) = controller_with(fast_settings(12, SortAlgorithmKinds::Bubble));

        let values = controller.create().unwrap().to_vec();
        let events = port.take_events();

        assert_eq!(values.len(), 12);
        assert_eq!(events.len(), 1);
        match &events[0] {
            RunEvent::Frame(data) => {
                assert_eq!(data.frame.values(), values.as_slice());
                assert_eq!(data.frame.highlight(), Highlight::None);
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn start_without_sequence_is_rejected() {
        let (mut controller, _port) = controller_with(fast_settings(5, SortAlgorithmKinds::Quick));

        assert_eq!(controller.start(), Err(ControllerError::NoSequence));
        assert!(!controller.is_running());
    }

    #[test]
    fn completed_run_sorts_and_returns_sequence() {
        let (mut controller, port) = controller_with(fast_settings(20, SortAlgorithmKinds::Bubble));
        let mut original = controller.create().unwrap().to_vec();
        port.take_events();

        let outcome = controller.start().unwrap();
        assert_eq!(outcome, StartOutcome::Started { generation: 1 });

        let events = wait_until(&port, Duration::from_secs(5), |e| finished(e).is_some());
        let (generation, run_outcome, frames) = finished(&events).expect("run should finish");

        assert_eq!(generation, 1);
        assert_eq!(run_outcome, RunOutcome::Completed);
        assert_eq!(frames as usize, bubble_sort_frame_count(20));
        assert_eq!(frame_count(&events), bubble_sort_frame_count(20));

        controller.wait();
        original.sort_unstable();
        assert_eq!(controller.sequence(), Some(original.as_slice()));
        assert!(!controller.is_running());
    }

    #[test]
    fn start_while_running_is_a_no_op() {
        let settings = RunSettings::new(10, Duration::from_millis(200))
            .unwrap()
            .with_algorithm(SortAlgorithmKinds::Selection)
            .with_seed(Some(1));
        let (mut controller, _port) = controller_with(settings);
        controller.create().unwrap();

        assert_eq!(
            controller.start(),
            Ok(StartOutcome::Started { generation: 1 })
        );
        assert!(controller.is_running());
        assert_eq!(
            controller.start(),
            Ok(StartOutcome::AlreadyRunning { generation: 1 })
        );
        assert_eq!(controller.generation(), 1);

        controller.stop();
    }

    #[test]
    fn stop_cancels_promptly_and_keeps_a_permutation() {
        let settings = RunSettings::new(30, Duration::from_secs(5))
            .unwrap()
            .with_algorithm(SortAlgorithmKinds::Insertion)
            .with_seed(Some(3));
        let (mut controller, port) = controller_with(settings);
        let mut original = controller.create().unwrap().to_vec();
        port.take_events();

        controller.start().unwrap();
        wait_until(&port, Duration::from_secs(2), |e| frame_count(e) >= 1);

        let stop_started = Instant::now();
        controller.stop();
        assert!(stop_started.elapsed() < Duration::from_secs(2));
        assert!(!controller.is_running());

        let events = port.take_events();
        let (_, outcome, frames) = finished(&events).expect("cancelled run still reports");
        assert_eq!(outcome, RunOutcome::Cancelled);
        assert_eq!(frames, 1);

        // The idle redraw is the last thing presented.
        match events.last() {
            Some(RunEvent::Frame(data)) => assert_eq!(data.frame.highlight(), Highlight::None),
            other => panic!("expected idle frame, got {:?}", other),
        }

        let mut recovered = controller.sequence().expect("sequence returned").to_vec();
        recovered.sort_unstable();
        original.sort_unstable();
        assert_eq!(recovered, original);
    }

    #[test]
    fn wait_recovers_sorted_sequence() {
        let (mut controller, port) = controller_with(fast_settings(16, SortAlgorithmKinds::Merge));
        controller.create().unwrap();
        port.take_events();

        controller.start().unwrap();
        controller.wait();

        assert!(!controller.is_running());
        let sorted = controller.sequence().expect("sequence returned").to_vec();
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        assert!(finished(&port.snapshot()).is_some());
    }

    #[test]
    fn stop_when_idle_presents_nothing() {
        let (mut controller, port) = controller_with(fast_settings(5, SortAlgorithmKinds::Merge));

        controller.stop();

        assert!(port.take_events().is_empty());
    }

    #[test]
    fn reset_clears_sequence_and_requires_new_create() {
        let (mut controller, port) = controller_with(fast_settings(8, SortAlgorithmKinds::Merge));
        controller.create().unwrap();
        port.take_events();

        controller.reset();

        assert_eq!(controller.sequence(), None);
        assert_eq!(port.take_events(), vec![RunEvent::Cleared]);
        assert_eq!(controller.start(), Err(ControllerError::NoSequence));
    }

    #[test]
    fn generations_increase_across_runs() {
        let (mut controller, port) = controller_with(fast_settings(6, SortAlgorithmKinds::Quick));

        controller.create().unwrap();
        controller.start().unwrap();
        wait_until(&port, Duration::from_secs(5), |e| finished(e).is_some());
        port.take_events();

        controller.create().unwrap();
        let second = controller.start().unwrap();
        let events = wait_until(&port, Duration::from_secs(5), |e| finished(e).is_some());

        assert_eq!(second, StartOutcome::Started { generation: 2 });
        assert_eq!(finished(&events).map(|f| f.0), Some(2));
    }

    #[test]
    fn settings_apply_to_next_create() {
        let (mut controller, _port) = controller_with(fast_settings(5, SortAlgorithmKinds::Bubble));
        controller.create().unwrap();

        let bigger = controller.settings().with_size(9).unwrap();
        controller.set_settings(bigger);

        assert_eq!(controller.sequence().map(<[u32]>::len), Some(5));
        assert_eq!(controller.create().unwrap().len(), 9);
    }

    #[test]
    fn same_seed_creates_same_sequence() {
        let (mut a, _pa) = controller_with(fast_settings(15, SortAlgorithmKinds::Bubble));
        let (mut b, _pb) = controller_with(fast_settings(15, SortAlgorithmKinds::Bubble));

        assert_eq!(a.create().unwrap().to_vec(), b.create().unwrap().to_vec());
    }

    #[test]
    fn every_algorithm_completes_through_the_controller() {
        for &kind in SortAlgorithmKinds::ALL {
            let (mut controller, port) = controller_with(fast_settings(25, kind));
            controller.create().unwrap();
            controller.start().unwrap();

            let events = wait_until(&port, Duration::from_secs(5), |e| finished(e).is_some());
            assert_eq!(
                finished(&events).map(|f| f.1),
                Some(RunOutcome::Completed),
                "{}",
                kind
            );

            controller.wait();
            let sorted = controller.sequence().expect("sequence returned").to_vec();
            assert!(sorted.windows(2).all(|w| w[0] <= w[1]), "{}", kind);
        }
    }
}
