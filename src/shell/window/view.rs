use crate::shell::window::WindowState;
use eframe::NativeOptions;
use egui::{ColorImage, TextureHandle, TextureOptions, Vec2};

const THUMBNAIL_WIDTH: f32 = 80.0;

/// 윈도우 프로그램을 실행한다. 창이 닫힐 때까지 반환되지 않는다.
pub fn run(state: WindowState) -> eframe::Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 640.0])
            .with_title("Book Finder"),
        ..Default::default()
    };

    eframe::run_native(
        "Book Finder",
        options,
        Box::new(move |_cc| Box::new(BookFinderApp::new(state))),
    )
}

/// egui 화면, 상태는 [`WindowState`]가 가지고 여기서는 그리기와 텍스처만 관리한다.
pub struct BookFinderApp {
    state: WindowState,
    textures: Vec<Option<TextureHandle>>,
    textures_revision: Option<u64>,
}

impl BookFinderApp {
    pub fn new(state: WindowState) -> Self {
        Self {
            state,
            textures: Vec::new(),
            textures_revision: None,
        }
    }

    fn sync_textures(&mut self, ctx: &egui::Context) {
        if self.textures_revision == Some(self.state.revision()) {
            return;
        }

        self.textures = self.state.cards()
            .iter()
            .enumerate()
            .map(|(index, view)| {
                view.thumbnail.as_ref().map(|thumbnail| {
                    let image = ColorImage::from_rgba_unmultiplied(
                        [thumbnail.width, thumbnail.height],
                        &thumbnail.rgba,
                    );
                    ctx.load_texture(format!("thumbnail-{}", index), image, TextureOptions::LINEAR)
                })
            })
            .collect();
        self.textures_revision = Some(self.state.revision());
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.label("Book name");
            ui.text_edit_singleline(&mut self.state.term);
        });
        ui.horizontal(|ui| {
            ui.label("How many");
            ui.add(egui::TextEdit::singleline(&mut self.state.limit).desired_width(60.0));
        });
        ui.horizontal(|ui| {
            if ui.button("Search").clicked() {
                let ctx = ui.ctx().clone();
                self.state.search(move || ctx.request_repaint());
            }
            if ui.button("Clear").clicked() {
                self.state.clear();
            }
            if self.state.is_searching() {
                ui.spinner();
            }
        });
        ui.label(self.state.status());
    }

    fn card_list(&self, ui: &mut egui::Ui) {
        egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
            for (index, view) in self.state.cards().iter().enumerate() {
                let card = &view.card;
                ui.group(|ui| {
                    ui.horizontal_top(|ui| {
                        if let Some(Some(texture)) = self.textures.get(index) {
                            let size = texture.size_vec2();
                            let scale = THUMBNAIL_WIDTH / size.x.max(1.0);
                            ui.image((texture.id(), Vec2::new(THUMBNAIL_WIDTH, size.y * scale)));
                        }
                        ui.vertical(|ui| {
                            ui.heading(&card.title);
                            ui.label(format!("Author(s): {}", card.authors));
                            ui.label(format!("Publisher: {}", card.publisher));
                            ui.label(format!("Published Date: {}", card.published_date));
                            ui.label(&card.description);
                        });
                    });
                });
            }
        });
    }
}

impl eframe::App for BookFinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();
        self.sync_textures(ctx);

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            self.controls(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            self.card_list(ui);
        });
    }
}
