use iced::{
    mouse, time,
    widget::{
        canvas::{self, Canvas, Frame, Geometry, LineDash, Path, Stroke},
        column, scrollable, text, Column, Container,
    },
    Color, Element, Length, Point, Rectangle, Renderer, Subscription, Task, Theme,
};
use radarcore::radar::{Direction, RadarFrame, Sweep};
use radarcore::RadarConfig;
use std::time::Duration;

fn main() -> iced::Result {
    iced::application(RadarDisplay::boot, RadarDisplay::update, RadarDisplay::view)
        .title(application_title)
        .subscription(application_subscription)
        .theme(application_theme)
        .run()
}

fn application_title(_: &RadarDisplay) -> String {
    "WiFi Radar".into()
}

fn application_subscription(state: &RadarDisplay) -> Subscription<Message> {
    // data polling and the sweep run on independent timers; the sweep never
    // touches the frame, it only redraws over it
    Subscription::batch([
        time::every(Duration::from_secs(1)).map(|_| Message::Poll),
        time::every(state.config.sweep_tick()).map(|_| Message::SweepTick),
    ])
}

fn application_theme(_: &RadarDisplay) -> Theme {
    Theme::Dark
}

#[derive(Debug)]
struct RadarDisplay {
    config: RadarConfig,
    frame: RadarFrame,
    sweep: Sweep,
    status: String,
}

#[derive(Debug, Clone)]
enum Message {
    Poll,
    SweepTick,
    FrameFetched(Result<RadarFrame, String>),
    ConfigFetched(Result<RadarConfig, String>),
}

impl RadarDisplay {
    fn boot() -> (Self, Task<Message>) {
        let config = RadarConfig::default();
        (
            RadarDisplay {
                frame: RadarFrame::empty(&config),
                config,
                sweep: Sweep::new(),
                status: "Waiting for radar frames...".into(),
            },
            Task::batch([
                Task::perform(fetch_config(), Message::ConfigFetched),
                Task::perform(fetch_frame(), Message::FrameFetched),
            ]),
        )
    }

    fn update(state: &mut Self, message: Message) -> Task<Message> {
        match message {
            Message::Poll => Task::perform(fetch_frame(), Message::FrameFetched),
            Message::SweepTick => {
                state.sweep.advance(state.config.sweep_step_deg);
                Task::none()
            }
            Message::FrameFetched(Ok(frame)) => {
                state.status = format!("Tracking {} networks", frame.entries.len());
                state.frame = frame;
                Task::none()
            }
            Message::FrameFetched(Err(err)) => {
                state.status = format!("Bridge error: {err}");
                Task::none()
            }
            Message::ConfigFetched(Ok(config)) => {
                state.config = config;
                Task::none()
            }
            // keep the built-in defaults until the bridge is reachable
            Message::ConfigFetched(Err(_)) => Task::none(),
        }
    }

    fn view(state: &Self) -> Element<'_, Message> {
        let scope = Canvas::new(RadarScope {
            frame: state.frame.clone(),
            sweep: state.sweep,
        })
        .width(Length::Fill)
        .height(Length::Fill);

        let entry_list = if state.frame.entries.is_empty() {
            Column::new().push(text("No networks in range").size(12))
        } else {
            state
                .frame
                .entries
                .iter()
                .fold(Column::new().spacing(4), |col, entry| {
                    col.push(
                        text(format!(
                            "{} | distance {:.1} | {} | {:.0} deg",
                            entry.ssid, entry.distance, entry.direction, entry.angle_deg
                        ))
                        .size(12),
                    )
                })
        };

        let layout = column![
            text(&state.status).size(16),
            scope,
            text("Merged networks").size(14),
            Container::new(scrollable(entry_list).height(Length::Fixed(110.0))).padding(6),
        ]
        .spacing(10)
        .padding(16);

        Container::new(layout)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

async fn fetch_config() -> Result<RadarConfig, String> {
    let response = reqwest::get("http://127.0.0.1:9000/config")
        .await
        .map_err(|e| e.to_string())?;
    response
        .json::<RadarConfig>()
        .await
        .map_err(|e| e.to_string())
}

async fn fetch_frame() -> Result<RadarFrame, String> {
    let response = reqwest::get("http://127.0.0.1:9000/frame")
        .await
        .map_err(|e| e.to_string())?;
    response
        .json::<RadarFrame>()
        .await
        .map_err(|e| e.to_string())
}

#[derive(Clone)]
struct RadarScope {
    frame: RadarFrame,
    sweep: Sweep,
}

impl RadarScope {
    /// Maps a point from frame units (0..extent on both axes) onto the
    /// canvas, keeping the radar square and centered.
    fn project(&self, bounds: &Rectangle, x: f32, y: f32) -> Point {
        let side = bounds.width.min(bounds.height);
        let scale = side / self.frame.extent.max(1.0);
        let offset_x = (bounds.width - side) / 2.0;
        let offset_y = (bounds.height - side) / 2.0;
        Point::new(offset_x + x * scale, offset_y + y * scale)
    }
}

impl canvas::Program<Message> for RadarScope {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        frame.fill_rectangle(
            Point::ORIGIN,
            bounds.size(),
            Color::from_rgb(0.02, 0.04, 0.02),
        );

        let center = self.project(&bounds, self.frame.center_x, self.frame.center_y);
        let edge = self.project(&bounds, self.frame.extent, self.frame.center_y);
        let radius = (edge.x - center.x).max(1.0);

        let ring = Path::new(|builder| builder.circle(center, radius * 0.9));
        frame.stroke(
            &ring,
            Stroke::default()
                .with_width(3.0)
                .with_color(Color::from_rgb(0.1, 0.8, 0.2)),
        );

        // primary sits at the center of its own radar
        let primary = Path::new(|builder| builder.circle(center, 5.0));
        frame.fill(&primary, Color::from_rgb(0.2, 0.4, 0.95));
        frame.fill_text(canvas::Text {
            content: "Primary".into(),
            position: Point::new(center.x + 10.0, center.y),
            color: Color::WHITE,
            size: 12.0.into(),
            ..canvas::Text::default()
        });

        for (index, direction) in Direction::ALL.iter().enumerate() {
            let radian = (index as f32 * 45.0).to_radians();
            let label = Point::new(
                center.x + (radius - 20.0) * radian.cos(),
                center.y + (radius - 20.0) * radian.sin(),
            );
            frame.fill_text(canvas::Text {
                content: direction.label().into(),
                position: label,
                color: Color::WHITE,
                size: 10.0.into(),
                ..canvas::Text::default()
            });
        }

        for entry in &self.frame.entries {
            let position = self.project(&bounds, entry.x, entry.y);

            let bearing = Path::new(|builder| {
                builder.move_to(center);
                builder.line_to(position);
            });
            frame.stroke(
                &bearing,
                Stroke {
                    line_dash: LineDash {
                        segments: &[4.0, 2.0],
                        offset: 0,
                    },
                    ..Stroke::default()
                        .with_width(1.0)
                        .with_color(Color::from_rgb(0.9, 0.9, 0.2))
                },
            );

            let blip = Path::new(|builder| builder.circle(position, 5.0));
            frame.fill(&blip, Color::from_rgb(0.9, 0.2, 0.2));
            frame.fill_text(canvas::Text {
                content: entry.ssid.chars().take(10).collect(),
                position: Point::new(position.x + 10.0, position.y),
                color: Color::WHITE,
                size: 10.0.into(),
                ..canvas::Text::default()
            });
            frame.fill_text(canvas::Text {
                content: format!("{} | {:.0} deg", entry.direction, entry.angle_deg),
                position: Point::new(position.x + 10.0, position.y + 14.0),
                color: Color::from_rgb(0.9, 0.9, 0.2),
                size: 9.0.into(),
                ..canvas::Text::default()
            });
        }

        let (tip_x, tip_y) = self.sweep.tip(&self.frame);
        let tip = self.project(&bounds, tip_x, tip_y);
        let sweep_line = Path::new(|builder| {
            builder.move_to(center);
            builder.line_to(tip);
        });
        frame.stroke(
            &sweep_line,
            Stroke::default().with_width(2.0).with_color(Color::WHITE),
        );

        vec![frame.into_geometry()]
    }
}
