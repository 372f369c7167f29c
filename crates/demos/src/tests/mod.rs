mod menu;
