use std::sync::atomic::{AtomicU8, Ordering};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    En,
    Zh,
}

static CURRENT_LANG: AtomicU8 = AtomicU8::new(0); // 0=En (default)

pub fn lang() -> Lang {
    match CURRENT_LANG.load(Ordering::Relaxed) {
        1 => Lang::Zh,
        _ => Lang::En,
    }
}

pub fn set_lang(l: Lang) {
    CURRENT_LANG.store(
        match l {
            Lang::En => 0,
            Lang::Zh => 1,
        },
        Ordering::Relaxed,
    );
}

/// Translate a key to the current language.
pub fn t(key: &str) -> &'static str {
    let zh = lang() == Lang::Zh;
    match key {
        // ── Menus ───────────────────────────────────────────
        "menu.view" => if zh { "视图" } else { "View" },
        "menu.grid" => if zh { "网格" } else { "Grid" },
        "menu.axes" => if zh { "坐标轴" } else { "Axes" },
        "menu.view_cube" => if zh { "视图指示器" } else { "View cube" },
        "menu.reset_camera" => if zh { "重置相机" } else { "Reset camera" },
        "menu.language" => if zh { "语言" } else { "Language" },
        "menu.settings" => if zh { "设置" } else { "Settings" },

        // ── Scene panel ─────────────────────────────────────
        "panel.scene" => if zh { "场景" } else { "Scene" },
        "scene.name" => if zh { "名称" } else { "Name" },
        "scene.desc" => if zh { "描述" } else { "Description" },

        "grid.section" => if zh { "网格辅助线" } else { "Grid helper" },
        "grid.visible" => if zh { "显示网格" } else { "Show grid" },
        "grid.size" => if zh { "大小" } else { "Size" },
        "grid.divisions" => if zh { "分割数" } else { "Divisions" },
        "grid.color" => if zh { "颜色" } else { "Color" },

        "axes.section" => if zh { "坐标轴辅助线" } else { "Axes helper" },
        "axes.visible" => if zh { "显示坐标轴" } else { "Show axes" },
        "axes.size" => if zh { "长度" } else { "Length" },

        "cube.section" => if zh { "视图指示器" } else { "View cube" },
        "cube.visible" => if zh { "显示指示器" } else { "Show view cube" },

        // ── View cube faces ─────────────────────────────────
        "cube.top" => if zh { "上" } else { "Top" },
        "cube.bottom" => if zh { "下" } else { "Bottom" },
        "cube.front" => if zh { "前" } else { "Front" },
        "cube.back" => if zh { "后" } else { "Back" },
        "cube.left" => if zh { "左" } else { "Left" },
        "cube.right" => if zh { "右" } else { "Right" },

        // ── Settings window ─────────────────────────────────
        "settings.title" => if zh { "设置" } else { "Settings" },
        "settings.font_size" => if zh { "字体大小" } else { "Font size" },
        "settings.background" => if zh { "背景颜色" } else { "Background color" },
        "settings.close" => if zh { "关闭" } else { "Close" },

        _ => {
            tracing::warn!("missing i18n key: {key}");
            "???"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_cube_faces_translate() {
        set_lang(Lang::En);
        for key in [
            "cube.top",
            "cube.bottom",
            "cube.front",
            "cube.back",
            "cube.left",
            "cube.right",
        ] {
            assert_ne!(t(key), "???");
        }
        set_lang(Lang::Zh);
        assert_eq!(t("cube.top"), "上");
        set_lang(Lang::En);
    }
}
