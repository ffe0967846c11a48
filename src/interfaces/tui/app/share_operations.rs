//! 分享相关操作：导出二维码、复制静态地图链接

use tracing::{info, warn};

use super::state::App;
use crate::form::{Msg, Notice};
use crate::interfaces::tui::qr;
use crate::interfaces::tui::ui::geo_map::static_map_url;

impl App {
    /// 把当前短链接的二维码保存为 SVG
    pub fn save_qr_code(&mut self) {
        let Some(short_url) = self.state.shortened().map(str::to_string) else {
            self.dispatch(Msg::Notify(Notice::error("Shorten a URL first")));
            return;
        };

        let path = self.settings.qr_output.clone();
        let notice = match qr::save_svg(&short_url, &path) {
            Ok(()) => {
                info!("QR code for {} saved to {}", short_url, path.display());
                Notice::success(format!("QR code saved to {}", path.display()))
            }
            Err(e) => {
                warn!("Saving QR code failed: {}", e);
                Notice::error(e.format_simple())
            }
        };
        self.dispatch(Msg::Notify(notice));
    }

    /// 复制带全部位置标记的静态地图链接（需要配置 map.access_token）
    pub fn copy_map_link(&mut self) {
        let Some(token) = self.settings.map_access_token.clone() else {
            self.dispatch(Msg::Notify(Notice::error(
                "Set map.access_token to enable map links",
            )));
            return;
        };
        let url = match self.state.stats() {
            Some(stats) => static_map_url(&stats.locations, &token),
            None => None,
        };
        let Some(url) = url else {
            self.dispatch(Msg::Notify(Notice::error("No location data to map")));
            return;
        };

        let notice = match self.clipboard.copy(&url) {
            Ok(()) => Notice::success("Map link copied"),
            Err(e) => {
                warn!("Copying map link failed: {}", e);
                Notice::error(e.format_simple())
            }
        };
        self.dispatch(Msg::Notify(notice));
    }
}
