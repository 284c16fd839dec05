mod tests {
    use std::time::Duration;

    use rand::{SeedableRng, rngs::StdRng};
    use remote_light_composer::{
        Animation, Command, Delay, DeliveryError, PatternId, RecordingClient, RunLimit, Script,
        Session, SessionConfig, SessionState, Show, ShowId, ShowSettings, Step, StopSignal,
        StripLength,
    };

    fn script(count: u8, delay: Delay) -> Box<Script> {
        Box::new(Script::new(
            "test",
            (0..count).map(|i| Step::send(Command::solid(i, 0, 0), delay)),
        ))
    }

    fn config(limit: RunLimit) -> SessionConfig {
        SessionConfig {
            limit,
            seed: Some(7),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_run_limit_caps_steps() {
        let client = RecordingClient::new(StripLength::DEFAULT);
        let routine = script(10, Delay::millis(100));
        let mut session = Session::new(client, routine, config(RunLimit::Steps(3)));

        let report = session.run(&StopSignal::new()).await.unwrap();
        assert_eq!(report.steps, 3);
        assert_eq!(report.commands_sent, 3);
        assert!(!report.stopped);
        assert_eq!(session.client().delivered(), 3);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausted_routine_ends_run() {
        let steps = [
            Step::send(Command::solid(1, 1, 1), Delay::millis(10)),
            Step::pause(Delay::millis(500)),
            Step::send(Command::solid(2, 2, 2), Delay::ZERO),
        ];
        let client = RecordingClient::new(StripLength::DEFAULT);
        let routine = Box::new(Script::new("pause", steps));
        let mut session = Session::new(client, routine, config(RunLimit::Forever));

        let report = session.run(&StopSignal::new()).await.unwrap();
        assert_eq!(report.steps, 3);
        assert_eq!(report.commands_sent, 2);
        assert!(!report.stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn test_raised_stop_prevents_next_step() {
        let stop = StopSignal::new();
        stop.stop();
        let client = RecordingClient::new(StripLength::DEFAULT);
        let mut session = Session::new(client, script(5, Delay::ZERO), config(RunLimit::Forever));

        let report = session.run(&stop).await.unwrap();
        assert_eq!(report.steps, 0);
        assert!(report.stopped);
        assert_eq!(session.client().delivered(), 0);
    }

    #[test]
    fn test_repeated_stop_requests_are_counted() {
        let stop = StopSignal::new();
        let handle = stop.clone();
        assert!(!stop.is_stopped());
        assert_eq!(stop.requests(), 0);

        assert_eq!(handle.stop(), 1);
        assert!(stop.is_stopped());
        assert_eq!(stop.stop(), 2);
        assert_eq!(handle.requests(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_interrupts_delay() {
        let strip = StripLength::new(16).unwrap();
        let animation = Animation::sample(PatternId::Plasma, &mut StdRng::seed_from_u64(1), strip)
            .with_delay(Delay::millis(1000));
        let mut session = Session::new(
            RecordingClient::new(strip),
            Box::new(animation),
            config(RunLimit::Forever),
        );
        let stop = StopSignal::new();
        let stopper = stop.clone();

        let (report, ()) = tokio::join!(session.run(&stop), async move {
            tokio::time::sleep(Duration::from_millis(2500)).await;
            stopper.stop();
        });
        let report = report.unwrap();
        assert_eq!(report.steps, 3);
        assert!(report.stopped);
    }

    #[tokio::test(start_paused = true)]
    async fn test_delivery_error_leaves_session_idle() {
        let mut rng = StdRng::seed_from_u64(3);
        let animation =
            Animation::sample(PatternId::Fire, &mut rng, StripLength::new(5).unwrap());
        let client = RecordingClient::new(StripLength::new(4).unwrap());
        let mut session = Session::new(client, Box::new(animation), config(RunLimit::Forever));

        let result = session.run(&StopSignal::new()).await;
        assert!(matches!(
            result,
            Err(DeliveryError::FrameLength {
                expected: 4,
                actual: 5
            })
        ));
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_seeded_sessions_repeat() {
        let strip = StripLength::new(32).unwrap();
        let mut recorded = Vec::new();
        for _ in 0..2 {
            let show = Show::new(ShowId::Chaos, ShowSettings::new(strip));
            let client = RecordingClient::new(strip);
            let mut session = Session::new(client, Box::new(show), config(RunLimit::Steps(300)));
            session.run(&StopSignal::new()).await.unwrap();
            let commands: Vec<Command> = session.into_client().commands().cloned().collect();
            recorded.push(commands);
        }
        assert!(recorded[0].len() > 250);
        assert_eq!(recorded[0], recorded[1]);
    }

    #[test]
    fn test_random_delay_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let delay = Delay::random_millis(10, 60);
        for _ in 0..100 {
            let sampled = delay.sample(&mut rng).as_millis();
            assert!((10..60).contains(&sampled));
        }
        let empty = Delay::random_millis(30, 30);
        assert_eq!(empty.sample(&mut rng).as_millis(), 30);
        assert_eq!(Delay::millis(80).sample(&mut rng).as_millis(), 80);
    }
}
