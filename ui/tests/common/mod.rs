use egui_kittest::Harness;
use gigboard_business::FieldTable;
use gigboard_ui::BoardApp;
use gigboard_ui::api::RowSource;
use gigboard_ui::demo::ticket_fields;
use gigboard_ui::state::BoardState;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ROWS_PATH: &str = "/api/tickets";

pub struct TestCtx<'a> {
    _mock_server: MockServer,
    harness: Harness<'a, BoardApp>,
}

impl<'a> TestCtx<'a> {
    pub fn harness_mut(&mut self) -> &mut Harness<'a, BoardApp> {
        &mut self.harness
    }

    #[allow(unused)]
    pub fn harness(&self) -> &Harness<'a, BoardApp> {
        &self.harness
    }

    /// Board over the sample fields, fed by a mock rows endpoint.
    pub async fn new_board(response: ResponseTemplate) -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path(ROWS_PATH))
            .respond_with(response)
            .mount(&mock_server)
            .await;

        let table = FieldTable::new(ticket_fields(), "_id").expect("sample fields are valid");
        let source = RowSource::Url(format!("{}{ROWS_PATH}", mock_server.uri()));
        let app = BoardApp::new(BoardState::new(table, source));
        let harness = Harness::new_ui_state(|ui, app: &mut BoardApp| app.show(ui), app);

        Self {
            _mock_server: mock_server,
            harness,
        }
    }

    /// Steps until the in-flight load lands.
    pub async fn wait_for_rows(&mut self) {
        for _ in 0..20 {
            self.harness.step();
            if !self.harness.state().state().is_fetching() {
                break;
            }
            tokio::time::sleep(std::time::Duration::from_millis(50)).await;
        }
        self.harness.step();
    }
}
