use crate::stopwatch::{Stopwatch, TICK_INTERVAL};
use slint::{ComponentHandle, ModelRc, SharedString, Timer, TimerMode, VecModel};
use std::cell::RefCell;
use std::rc::Rc;

slint::slint! {
import { ListView } from "std-widgets.slint";

export struct LapEntry {
    number: int,
    time: string,
}

component ActionButton inherits Rectangle {
    in property <string> label;
    in property <color> base;
    in property <bool> enabled: true;

    callback clicked <=> touch.clicked;

    width: 110px;
    height: 44px;
    border-radius: 8px;
    background: touch.pressed ? root.base.darker(20%) : touch.has-hover ? root.base.brighter(10%) : root.base;
    opacity: root.enabled ? 1.0 : 0.5;

    touch := TouchArea {
        enabled: root.enabled;
    }

    Text {
        width: 100%;
        height: 100%;
        text: root.label;
        color: white;
        font-size: 16px;
        font-weight: 600;
        horizontal-alignment: center;
        vertical-alignment: center;
    }
}

export component MainWindow inherits Window {
    in property <string> display: "00:00.00";
    in property <bool> running;
    in property <[LapEntry]> laps;

    callback start-stop();
    callback lap();
    callback reset();

    preferred-width: 480px;
    preferred-height: 620px;
    title: @tr("Lapwatch");
    background: #111827;

    VerticalLayout {
        padding: 24px;
        spacing: 20px;

        Text {
            text: @tr("Stopwatch");
            color: white;
            font-size: 30px;
            font-weight: 700;
            horizontal-alignment: center;
        }

        Text {
            text: root.display;
            color: white;
            font-size: 56px;
            font-family: "monospace";
            horizontal-alignment: center;
        }

        HorizontalLayout {
            spacing: 12px;
            alignment: center;

            ActionButton {
                label: root.running ? @tr("Pause") : @tr("Start");
                base: root.running ? #dc2626 : #16a34a;
                clicked => { root.start-stop(); }
            }

            ActionButton {
                label: @tr("Lap");
                // #2563eb, spelled as rgb() because the Rust lexer rejects
                // hex literals that look like a float exponent inside slint!.
                base: rgb(37, 99, 235);
                enabled: root.running;
                clicked => { root.lap(); }
            }

            ActionButton {
                label: @tr("Reset");
                base: #4b5563;
                clicked => { root.reset(); }
            }
        }

        if root.laps.length > 0 : Rectangle {
            background: #1f2937;
            border-radius: 12px;
            vertical-stretch: 1;

            VerticalLayout {
                padding: 16px;
                spacing: 12px;

                Text {
                    text: @tr("Lap Times");
                    color: white;
                    font-size: 20px;
                    font-weight: 600;
                }

                ListView {
                    vertical-stretch: 1;

                    for entry in root.laps : HorizontalLayout {
                        padding: 8px;

                        Text {
                            text: @tr("Lap {}", entry.number);
                            color: #d1d5db;
                            horizontal-stretch: 1;
                        }

                        Text {
                            text: entry.time;
                            color: white;
                            font-family: "monospace";
                        }
                    }
                }
            }
        }
    }
}
}

pub fn run() -> anyhow::Result<()> {
    App::new()?.run()
}

pub struct App {
    window: MainWindow,
    // Dropped with the app, which cancels any pending tick.
    _ticker: Rc<Timer>,
}

impl App {
    pub fn new() -> anyhow::Result<Self> {
        let window = MainWindow::new()?;
        let state = Rc::new(RefCell::new(Stopwatch::new()));
        let ticker = Rc::new(Timer::default());

        window.set_display(SharedString::from(state.borrow().display()));
        window.set_laps(lap_rows(&state.borrow()));

        window.on_start_stop({
            let state = state.clone();
            let ticker = ticker.clone();
            let weak = window.as_weak();
            move || {
                let running = state.borrow_mut().toggle();

                if running {
                    let state = state.clone();
                    let weak = weak.clone();
                    ticker.start(TimerMode::Repeated, TICK_INTERVAL, move || {
                        let mut stopwatch = state.borrow_mut();
                        stopwatch.tick();

                        if let Some(window) = weak.upgrade() {
                            window.set_display(SharedString::from(stopwatch.display()));
                        }
                    });
                } else {
                    ticker.stop();
                }

                tracing::debug!(running, "toggled the stopwatch");

                if let Some(window) = weak.upgrade() {
                    window.set_running(running);
                }
            }
        });

        window.on_lap({
            let state = state.clone();
            let weak = window.as_weak();
            move || {
                let recorded = state.borrow_mut().lap();

                match recorded {
                    Some(lap) => {
                        tracing::debug!(id = lap.id, time = %lap.time, "recorded a lap");

                        if let Some(window) = weak.upgrade() {
                            window.set_laps(lap_rows(&state.borrow()));
                        }
                    }
                    None => tracing::debug!("dropped a lap request while stopped"),
                }
            }
        });

        window.on_reset({
            let state = state.clone();
            let ticker = ticker.clone();
            let weak = window.as_weak();
            move || {
                ticker.stop();

                let mut stopwatch = state.borrow_mut();
                stopwatch.reset();

                tracing::debug!("reset the stopwatch");

                if let Some(window) = weak.upgrade() {
                    window.set_running(false);
                    window.set_display(SharedString::from(stopwatch.display()));
                    window.set_laps(lap_rows(&stopwatch));
                }
            }
        });

        Ok(Self {
            window,
            _ticker: ticker,
        })
    }

    pub fn run(&self) -> anyhow::Result<()> {
        self.window.run()?;
        Ok(())
    }
}

/// Builds the view of the lap list, newest first, each row numbered by the
/// lap's own id.
fn lap_rows(stopwatch: &Stopwatch) -> ModelRc<LapEntry> {
    let rows: Vec<LapEntry> = stopwatch
        .laps()
        .iter()
        .rev()
        .map(|lap| LapEntry {
            number: lap.id as i32,
            time: SharedString::from(lap.time.as_str()),
        })
        .collect();

    ModelRc::new(VecModel::from(rows))
}
