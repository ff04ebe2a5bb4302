//! Chinese display names for icons

use crate::category::Category;

/// Curated name → Simplified Chinese table. Order matters for substring lookups.
const TRANSLATIONS: &[(&str, &str)] = &[
    // Navigation
    ("GlobalNavButton", "全局导航按钮"),
    ("Back", "后退"),
    ("Forward", "前进"),
    ("Up", "向上"),
    ("Down", "向下"),
    ("Left", "向左"),
    ("Right", "向右"),
    ("Home", "主页"),
    ("ChevronLeft", "左箭头"),
    ("ChevronRight", "右箭头"),
    ("ChevronUp", "上箭头"),
    ("ChevronDown", "下箭头"),

    // Actions
    ("Add", "添加"),
    ("Remove", "删除"),
    ("Delete", "删除"),
    ("Edit", "编辑"),
    ("Save", "保存"),
    ("SaveAs", "另存为"),
    ("Open", "打开"),
    ("Close", "关闭"),
    ("Cancel", "取消"),
    ("Accept", "接受"),
    ("OK", "确定"),
    ("Copy", "复制"),
    ("Cut", "剪切"),
    ("Paste", "粘贴"),
    ("Undo", "撤销"),
    ("Redo", "重做"),
    ("Refresh", "刷新"),
    ("Sync", "同步"),
    ("Share", "分享"),
    ("Print", "打印"),
    ("Scan", "扫描"),

    // Media
    ("Play", "播放"),
    ("Pause", "暂停"),
    ("Stop", "停止"),
    ("Video", "视频"),
    ("Camera", "相机"),
    ("Microphone", "麦克风"),
    ("Volume", "音量"),
    ("Mute", "静音"),
    ("Music", "音乐"),
    ("Audio", "音频"),
    ("Speaker", "扬声器"),

    // Communication
    ("Mail", "邮件"),
    ("Phone", "电话"),
    ("Message", "消息"),
    ("Chat", "聊天"),
    ("Contact", "联系人"),
    ("People", "人员"),
    ("Wifi", "无线网络"),
    ("Bluetooth", "蓝牙"),
    ("Ethernet", "以太网"),
    ("VPN", "虚拟专用网"),
    ("Connect", "连接"),

    // Files
    ("Folder", "文件夹"),
    ("File", "文件"),
    ("Document", "文档"),
    ("Picture", "图片"),
    ("Photo", "照片"),
    ("Calendar", "日历"),
    ("Library", "库"),
    ("Download", "下载"),
    ("Upload", "上传"),
    ("Cloud", "云端"),

    // Status
    ("Error", "错误"),
    ("Warning", "警告"),
    ("Info", "信息"),
    ("Success", "成功"),
    ("Help", "帮助"),
    ("Flag", "标记"),
    ("Favorite", "收藏"),
    ("Like", "喜欢"),
    ("Dislike", "不喜欢"),
    ("Block", "阻止"),
    ("Lock", "锁定"),
    ("Unlock", "解锁"),
    ("Shield", "盾牌"),

    // UI Elements
    ("Settings", "设置"),
    ("View", "查看"),
    ("Search", "搜索"),
    ("Filter", "筛选"),
    ("Sort", "排序"),
    ("Zoom", "缩放"),
    ("ZoomIn", "放大"),
    ("ZoomOut", "缩小"),
    ("FullScreen", "全屏"),
    ("NewWindow", "新窗口"),
    ("Split", "分割"),
    ("Pane", "窗格"),

    // Devices
    ("Devices", "设备"),
    ("Printer", "打印机"),
    ("Keyboard", "键盘"),
    ("Mouse", "鼠标"),
    ("Touchpad", "触摸板"),
    ("Webcam", "摄像头"),
    ("Headphone", "耳机"),
    ("Headset", "耳麦"),
    ("Tablet", "平板"),
    ("Laptop", "笔记本"),
    ("Desktop", "台式机"),
    ("Mobile", "手机"),
    ("Xbox", "Xbox"),

    // Others
    ("Battery", "电池"),
    ("Brightness", "亮度"),
    ("Location", "位置"),
    ("Map", "地图"),
    ("Clock", "时钟"),
    ("Alarm", "闹钟"),
    ("Timer", "计时器"),
    ("Calculator", "计算器"),
    ("Weather", "天气"),
    ("News", "新闻"),
    ("Store", "商店"),
    ("Shop", "购物"),
    ("Cart", "购物车"),
    ("Game", "游戏"),
    ("Health", "健康"),
    ("Fitness", "健身"),
];

/// Chinese display name for an icon, or an empty string when nothing matches.
///
/// An exact name match wins; otherwise the first table entry (in table order)
/// whose lowercase key occurs inside the lowercased name is used. Substring hits
/// can be wrong (`Setup` contains `Up`); that is accepted.
pub fn translate(name: &str, _category: Category) -> &'static str {
    if let Some(&(_, zh)) = TRANSLATIONS.iter().find(|(key, _)| *key == name) {
        return zh;
    }

    let lower = name.to_lowercase();
    TRANSLATIONS
        .iter()
        .find(|(key, _)| lower.contains(&key.to_lowercase()))
        .map_or("", |&(_, zh)| zh)
}
