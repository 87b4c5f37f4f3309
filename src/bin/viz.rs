use std::path::Path;

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};

use cannonsim::io::settings;
use cannonsim::sim;
use cannonsim::types::{SimulationParameters, SimulationResult, State};

/// Demo shot used when no settings file is available.
fn demo_shot() -> SimulationParameters {
    SimulationParameters {
        gravity: 9.8,
        mass: 1.0,
        velocity: 50.0,
        angle: 0.5,
        height: 10.0,
        air_resistance: 0.01,
        time_step: 0.01,
    }
}

fn main() -> eframe::Result {
    let input_dir = std::env::args().nth(1).unwrap_or_else(|| "input_files".into());
    let params = settings::read_settings_dir(Path::new(&input_dir)).unwrap_or_else(|err| {
        eprintln!("Note: {err}; using demo parameters");
        demo_shot()
    });

    let (result, trajectory) = match sim::simulate_trace(&params) {
        Ok(run) => run,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let app = SimViz {
        params,
        result,
        trajectory,
    };
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1200.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native("Cannonsim", options, Box::new(|_| Ok(Box::new(app))))
}

struct SimViz {
    params: SimulationParameters,
    result: SimulationResult,
    trajectory: Vec<State>,
}

impl eframe::App for SimViz {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let step = (self.trajectory.len() / 2000).max(1);
        let sampled: Vec<&State> = self.trajectory.iter().step_by(step).collect();

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.heading("Projectile trajectory");
            ui.label(format!(
                "Distance: {:.2} m  |  Final velocity: ({:.2}, {:.2}) m/s  |  \
                 Flight: {:.2} s  |  dt: {} s",
                self.result.distance,
                self.result.final_vx,
                self.result.final_vy,
                self.trajectory.last().map_or(0.0, |s| s.time),
                self.params.time_step,
            ));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let available = ui.available_size();
            let half_w = available.x / 2.0 - 8.0;

            ui.horizontal(|ui| {
                // Altitude vs Downrange
                ui.vertical(|ui| {
                    ui.label("Trajectory Profile (m)");
                    let points: PlotPoints = sampled.iter()
                        .map(|s| [s.pos.x, s.pos.y])
                        .collect();
                    Plot::new("profile")
                        .width(half_w)
                        .height(available.y - 24.0)
                        .x_axis_label("Downrange (m)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Trajectory", points));
                        });
                });

                // Speed vs Time
                ui.vertical(|ui| {
                    ui.label("Speed (m/s)");
                    let points: PlotPoints = sampled.iter()
                        .map(|s| [s.time, s.vel.norm()])
                        .collect();
                    Plot::new("speed")
                        .width(half_w)
                        .height(available.y - 24.0)
                        .x_axis_label("Time (s)")
                        .show(ui, |plot_ui| {
                            plot_ui.line(Line::new("Speed", points));
                        });
                });
            });
        });
    }
}
